//! Screen controllers for the application.
//!
//! One controller per screen. Each owns its local interaction state and
//! handles both rendering and events; the router in `app` holds exactly
//! one active controller at a time and replaces it on navigation.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                   App                        │
//! │   Navigator (current Screen)                 │
//! │   active: Box<dyn Screen>                    │
//! │                                              │
//! │   event ─▶ active.handle_event(…)            │
//! │                 │                            │
//! │                 ▼                            │
//! │   ScreenAction::Navigate(target)             │
//! │                 │                            │
//! │                 ▼                            │
//! │   navigator.goto(target)                     │
//! │   active = controller_for(target, catalog)   │
//! └──────────────────────────────────────────────┘
//! ```

pub mod analytics;
pub mod home;
pub mod live_feed;
pub mod login;
pub mod notifications;
pub mod onboarding;
pub mod pet_profiles;
pub mod screen_trait;
pub mod settings;
pub mod splash;

pub use analytics::AnalyticsScreen;
pub use home::HomeScreen;
pub use live_feed::LiveFeedScreen;
pub use login::LoginScreen;
pub use notifications::NotificationsScreen;
pub use onboarding::OnboardingScreen;
pub use pet_profiles::PetProfilesScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
pub use settings::SettingsScreen;
pub use splash::SplashScreen;

use crate::data::Catalog;
use crate::ui::Screen as ScreenId;

/// Construct a fresh controller for `screen`.
///
/// Controllers that need domain data receive their read-only collections
/// here; none of them keep references into each other.
pub fn controller_for(screen: ScreenId, catalog: &Catalog) -> Box<dyn Screen> {
    match screen {
        ScreenId::Splash => Box::new(SplashScreen::new()),
        ScreenId::Onboarding => Box::new(OnboardingScreen::new()),
        ScreenId::Login => Box::new(LoginScreen::new()),
        ScreenId::Home => Box::new(HomeScreen::new()),
        ScreenId::LiveFeed => Box::new(LiveFeedScreen::new(catalog.pets.first().cloned())),
        ScreenId::PetProfiles => Box::new(PetProfilesScreen::new(
            catalog.pets.clone(),
            catalog.feeding_history.clone(),
            catalog.schedule.clone(),
        )),
        ScreenId::Notifications => Box::new(NotificationsScreen::new(catalog.notifications.clone())),
        ScreenId::Settings => Box::new(SettingsScreen::new()),
        ScreenId::Analytics => Box::new(AnalyticsScreen::new()),
    }
}
