//! Splash screen shown at startup.

use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::ui::Screen as ScreenId;
use crate::widgets::PawfeedLogo;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Stateless entry screen; any confirm key moves on to onboarding.
pub struct SplashScreen;

impl Default for SplashScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for SplashScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(area);

        // Logo block centered horizontally
        let logo_width = 24;
        let logo_area = Rect {
            x: area.x + area.width.saturating_sub(logo_width) / 2,
            width: logo_width.min(area.width),
            ..chunks[1]
        };
        frame.render_widget(PawfeedLogo::regular(), logo_area);

        let tagline = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("Smart feeding for happy pets", t.text_style())),
            Line::from(""),
            Line::from(Span::styled("Press Enter to get started", t.emphasis_style())),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(tagline, chunks[2]);

        Ok(())
    }

    fn handle_event(&mut self, event: Event, _ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return Ok(ScreenAction::None);
            }
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    return Ok(ScreenAction::Navigate(ScreenId::Onboarding));
                }
                KeyCode::Char('q') | KeyCode::Esc => return Ok(ScreenAction::Quit),
                _ => {}
            }
        }
        Ok(ScreenAction::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Catalog;
    use crossterm::event::{KeyEvent, KeyModifiers};

    #[test]
    fn enter_leads_to_onboarding() -> Result<()> {
        let catalog = Catalog::sample();
        let ctx = ScreenContext::new(&catalog);
        let mut screen = SplashScreen::new();
        let action = screen.handle_event(
            Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            &ctx,
        )?;
        assert_eq!(action, ScreenAction::Navigate(ScreenId::Onboarding));
        Ok(())
    }
}
