//! Screen controller trait and associated types.
//!
//! Each screen controller owns only the interaction state local to that
//! screen (dialog open/closed, selected entity, slider value, tab index,
//! toggle state). Controllers never reach into each other; cross-screen
//! effects flow back to the router as a [`ScreenAction`].

use crate::data::Catalog;
use crate::ui::Screen as ScreenId;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Context provided for rendering screens.
///
/// Gives read-only access to the shared sample catalog; controllers may
/// render from it without owning a copy.
pub struct RenderContext<'a> {
    pub catalog: &'a Catalog,
}

impl<'a> RenderContext<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    pub catalog: &'a Catalog,
}

impl<'a> ScreenContext<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }
}

/// Actions a screen can return after handling an event.
///
/// Screens signal navigation instead of mutating the router directly.
/// A screen emits `Navigate` exactly once per discrete navigation-
/// triggering user action, never as a side effect of unrelated state
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// Navigate to a different screen.
    Navigate(ScreenId),
    /// Request to quit the application.
    Quit,
}

/// Trait for screen controllers.
///
/// Controllers are constructed fresh when their screen is entered and
/// dropped when it is left, so no screen's interaction state survives a
/// transition away and back.
pub trait Screen {
    /// Render the screen.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event, returning what should happen next.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Called when the screen is entered (navigated to).
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
