//! Screen navigation.
//!
//! The navigator holds the single current [`Screen`] value and performs
//! transitions between screens. The transition graph is total: any screen
//! may move to any other, and `goto` cannot fail. "Back" is not a stack
//! pop; each secondary screen is hard-wired to return to the dashboard
//! hub, while the entry chain (splash, onboarding, login) is forward-only.

use crate::ui::Screen;
use tracing::debug;

/// Holds the current screen and performs transitions.
///
/// The navigator is memoryless beyond the current screen: after any
/// sequence of `goto` calls, the current screen equals the last target.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Screen,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start at the splash screen.
    pub fn new() -> Self {
        Self {
            current: Screen::Splash,
        }
    }

    /// The screen currently shown.
    pub fn current(&self) -> Screen {
        self.current
    }

    /// Transition to `target` unconditionally.
    pub fn goto(&mut self, target: Screen) {
        debug!("navigate: {:?} -> {:?}", self.current, target);
        self.current = target;
    }

    /// Where the back affordance of `screen` leads, if it has one.
    ///
    /// Every hub-adjacent screen returns to `Home`. The entry chain has
    /// no back affordance.
    pub fn back_target(screen: Screen) -> Option<Screen> {
        match screen {
            Screen::Splash | Screen::Onboarding | Screen::Login | Screen::Home => None,
            Screen::LiveFeed
            | Screen::PetProfiles
            | Screen::Notifications
            | Screen::Settings
            | Screen::Analytics => Some(Screen::Home),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_splash() {
        assert_eq!(Navigator::new().current(), Screen::Splash);
    }

    #[test]
    fn current_is_last_target() {
        let mut nav = Navigator::new();
        for target in [
            Screen::Onboarding,
            Screen::Login,
            Screen::Home,
            Screen::Analytics,
            Screen::Home,
            Screen::LiveFeed,
        ] {
            nav.goto(target);
            assert_eq!(nav.current(), target);
        }
    }

    #[test]
    fn transitions_are_unrestricted() {
        // Any screen may jump to any other, including "backwards" moves
        // the UI never offers.
        let mut nav = Navigator::new();
        nav.goto(Screen::Analytics);
        nav.goto(Screen::Splash);
        assert_eq!(nav.current(), Screen::Splash);
    }

    #[test]
    fn secondary_screens_return_to_home() {
        for screen in [
            Screen::LiveFeed,
            Screen::PetProfiles,
            Screen::Notifications,
            Screen::Settings,
            Screen::Analytics,
        ] {
            assert_eq!(Navigator::back_target(screen), Some(Screen::Home));
        }
    }

    #[test]
    fn entry_chain_is_forward_only() {
        for screen in [Screen::Splash, Screen::Onboarding, Screen::Login, Screen::Home] {
            assert_eq!(Navigator::back_target(screen), None);
        }
    }
}
