//! PawFeed - a terminal companion app mockup for a smart pet feeder
//!
//! The functional core is the navigation/state model: a closed set of
//! screens, a total transition function between them, and per-screen
//! controllers that own only their local interaction state. Everything
//! the screens display is static sample data; the feeder, its camera
//! and its RFID reader are simulated.

// Core modules
pub mod app;
pub mod cli;
pub mod components;
pub mod data;
pub mod model;
pub mod navigator;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod ui;
pub mod widgets;

// Re-exports for convenience
pub use data::Catalog;
pub use navigator::Navigator;
pub use ui::{Screen, Tab};
