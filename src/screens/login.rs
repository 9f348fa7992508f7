//! Sign-in screen.
//!
//! Presentational only: the form accepts typing but no credentials are
//! validated; confirm always moves on to the dashboard.

use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::ui::Screen as ScreenId;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LoginField {
    #[default]
    Email,
    Password,
}

/// Login form state: two text buffers and a focus marker.
pub struct LoginScreen {
    email: String,
    password: String,
    focused: LoginField,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            focused: LoginField::default(),
        }
    }

    fn focused_buffer(&mut self) -> &mut String {
        match self.focused {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    fn render_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        value: &str,
        focused: bool,
    ) {
        let t = theme();
        let border_style = if focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let field = Paragraph::new(value.to_string())
            .style(t.text_style())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(format!(" {} ", label)),
            );
        frame.render_widget(field, area);
    }
}

impl Screen for LoginScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .margin(2)
            .split(area);

        let heading = Paragraph::new(vec![
            Line::from(Span::styled("🍽️  Welcome Back", t.title_style())),
            Line::from(Span::styled("Sign in to continue", t.muted_style())),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(heading, chunks[1]);

        self.render_field(
            frame,
            chunks[3],
            "Email",
            &self.email,
            self.focused == LoginField::Email,
        );
        let masked = "•".repeat(self.password.chars().count());
        self.render_field(
            frame,
            chunks[4],
            "Password",
            &masked,
            self.focused == LoginField::Password,
        );

        frame.render_widget(
            Paragraph::new("Sign In [Enter] | Switch field [Tab]")
                .style(t.emphasis_style())
                .alignment(Alignment::Center),
            chunks[5],
        );

        Ok(())
    }

    fn handle_event(&mut self, event: Event, _ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return Ok(ScreenAction::None);
            }
            match key.code {
                KeyCode::Enter => {
                    // No credential validation in this mockup
                    info!("login confirmed");
                    return Ok(ScreenAction::Navigate(ScreenId::Home));
                }
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                    self.focused = match self.focused {
                        LoginField::Email => LoginField::Password,
                        LoginField::Password => LoginField::Email,
                    };
                }
                KeyCode::Backspace => {
                    self.focused_buffer().pop();
                }
                KeyCode::Char(c) => {
                    self.focused_buffer().push(c);
                }
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

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn confirm_always_reaches_home() -> Result<()> {
        let catalog = Catalog::sample();
        let ctx = ScreenContext::new(&catalog);
        let mut login = LoginScreen::new();
        // Typing mutates local state only, never navigates
        for c in "luna@pawfeed.app".chars() {
            assert_eq!(login.handle_event(press(KeyCode::Char(c)), &ctx)?, ScreenAction::None);
        }
        let action = login.handle_event(press(KeyCode::Enter), &ctx)?;
        assert_eq!(action, ScreenAction::Navigate(ScreenId::Home));
        Ok(())
    }
}
