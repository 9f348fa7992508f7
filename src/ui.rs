//! Screen and tab identities.

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Onboarding,
    Login,
    Home,
    LiveFeed,
    PetProfiles,
    Notifications,
    Settings,
    Analytics,
}

impl Screen {
    /// Title shown in the screen header.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Splash => "Welcome",
            Screen::Onboarding => "Getting Started",
            Screen::Login => "Sign In",
            Screen::Home => "Dashboard",
            Screen::LiveFeed => "Live Feed",
            Screen::PetProfiles => "Pet Profiles",
            Screen::Notifications => "Notifications",
            Screen::Settings => "Settings",
            Screen::Analytics => "Analytics",
        }
    }
}

/// Bottom navigation tabs shown on the dashboard.
///
/// Tab selection is visual state; selecting `Live`, `Pets` or `Alerts`
/// additionally triggers a full screen transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Live,
    Pets,
    Alerts,
}

impl Tab {
    pub fn all() -> [Tab; 4] {
        [Tab::Home, Tab::Live, Tab::Pets, Tab::Alerts]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Live => "Live",
            Tab::Pets => "Pets",
            Tab::Alerts => "Alerts",
        }
    }

    /// The screen this tab leads to.
    pub fn screen(&self) -> Screen {
        match self {
            Tab::Home => Screen::Home,
            Tab::Live => Screen::LiveFeed,
            Tab::Pets => Screen::PetProfiles,
            Tab::Alerts => Screen::Notifications,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::all().get(index).copied()
    }
}
