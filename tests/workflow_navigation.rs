//! End-to-end navigation workflows.
//!
//! Drives real screen controllers through the same router steps the app
//! performs: feed a key event to the active controller, apply any
//! `Navigate` action to the navigator and construct the next controller.
//! No terminal is involved; event handling is pure state.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use pawfeed::screens::{controller_for, Screen as Controller, ScreenAction, ScreenContext};
use pawfeed::{Catalog, Navigator, Screen};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Minimal stand-in for the app's router loop.
struct Router {
    navigator: Navigator,
    active: Box<dyn Controller>,
    catalog: Catalog,
}

impl Router {
    fn new() -> Self {
        let catalog = Catalog::sample();
        let navigator = Navigator::new();
        let active = controller_for(navigator.current(), &catalog);
        Self {
            navigator,
            active,
            catalog,
        }
    }

    fn press(&mut self, code: KeyCode) -> Result<ScreenAction> {
        let ctx = ScreenContext::new(&self.catalog);
        let action = self.active.handle_event(press(code), &ctx)?;
        if let ScreenAction::Navigate(target) = action {
            self.navigator.goto(target);
            self.active = controller_for(target, &self.catalog);
            self.active.on_enter(&ctx)?;
        }
        Ok(action)
    }

    fn current(&self) -> Screen {
        self.navigator.current()
    }
}

#[test]
fn first_run_reaches_the_dashboard() -> Result<()> {
    let mut router = Router::new();
    assert_eq!(router.current(), Screen::Splash);

    // Splash dismisses into onboarding
    router.press(KeyCode::Enter)?;
    assert_eq!(router.current(), Screen::Onboarding);

    // Three slides; advancing past the last one completes onboarding
    router.press(KeyCode::Enter)?;
    router.press(KeyCode::Enter)?;
    assert_eq!(router.current(), Screen::Onboarding);
    router.press(KeyCode::Enter)?;
    assert_eq!(router.current(), Screen::Login);

    // The sign-in form accepts anything
    for c in "demo".chars() {
        router.press(KeyCode::Char(c))?;
    }
    router.press(KeyCode::Enter)?;
    assert_eq!(router.current(), Screen::Home);
    Ok(())
}

#[test]
fn onboarding_skip_jumps_straight_to_login() -> Result<()> {
    let mut router = Router::new();
    router.press(KeyCode::Enter)?;
    assert_eq!(router.current(), Screen::Onboarding);

    router.press(KeyCode::Char('s'))?;
    assert_eq!(router.current(), Screen::Login);
    Ok(())
}

#[test]
fn tabs_and_back_round_trip_through_home() -> Result<()> {
    let mut router = Router::new();
    router.press(KeyCode::Enter)?;
    router.press(KeyCode::Char('s'))?;
    router.press(KeyCode::Enter)?;
    assert_eq!(router.current(), Screen::Home);

    // Tab keys 2/3/4 leave the dashboard; Esc returns to it
    for (key, expected) in [
        ('2', Screen::LiveFeed),
        ('3', Screen::PetProfiles),
        ('4', Screen::Notifications),
    ] {
        router.press(KeyCode::Char(key))?;
        assert_eq!(router.current(), expected);
        router.press(KeyCode::Esc)?;
        assert_eq!(router.current(), Screen::Home);
    }

    // Tab 1 is the dashboard itself; no transition happens
    let action = router.press(KeyCode::Char('1'))?;
    assert_eq!(action, ScreenAction::None);
    assert_eq!(router.current(), Screen::Home);
    Ok(())
}

#[test]
fn quick_actions_open_settings_and_analytics() -> Result<()> {
    let mut router = Router::new();
    router.press(KeyCode::Enter)?;
    router.press(KeyCode::Char('s'))?;
    router.press(KeyCode::Enter)?;

    router.press(KeyCode::Char('a'))?;
    assert_eq!(router.current(), Screen::Analytics);
    router.press(KeyCode::Esc)?;

    router.press(KeyCode::Char('o'))?;
    assert_eq!(router.current(), Screen::Settings);
    router.press(KeyCode::Esc)?;
    assert_eq!(router.current(), Screen::Home);
    Ok(())
}

#[test]
fn quit_is_signalled_not_navigated() -> Result<()> {
    let mut router = Router::new();
    router.press(KeyCode::Enter)?;
    router.press(KeyCode::Char('s'))?;
    router.press(KeyCode::Enter)?;

    let action = router.press(KeyCode::Char('q'))?;
    assert_eq!(action, ScreenAction::Quit);
    // The router stays where it was; quitting is the app's decision
    assert_eq!(router.current(), Screen::Home);
    Ok(())
}
