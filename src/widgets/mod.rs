// Reusable UI widgets

pub mod dialog;
pub mod logo;
pub mod tab_bar;

pub use dialog::{Dialog, DialogVariant};
pub use logo::{PawfeedLogo, Size};
pub use tab_bar::TabBar;
