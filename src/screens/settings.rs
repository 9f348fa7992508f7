//! Settings screen.
//!
//! A cursor over a short list of toggle rows plus a static device/info
//! section. The toggles are decorative flags only; flipping them never
//! reconfigures anything outside this controller.

use crate::components::{Footer, Header};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::ui::Screen as ScreenId;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget};
use ratatui::Frame;

const TOGGLE_LABELS: [&str; 3] = ["Push Notifications", "Sound Alerts", "Dark Mode Preview"];

/// Settings controller. Three independent decorative toggles.
pub struct SettingsScreen {
    toggles: [bool; 3],
    list_state: ListState,
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            // Push and sound default on, matching the device defaults
            toggles: [true, true, false],
            list_state,
        }
    }

    pub fn toggles(&self) -> [bool; 3] {
        self.toggles
    }

    /// Flip the toggle under the cursor. Purely presentational.
    pub fn toggle_current(&mut self) {
        if let Some(i) = self.list_state.selected() {
            if let Some(flag) = self.toggles.get_mut(i) {
                *flag = !*flag;
            }
        }
    }
}

impl Screen for SettingsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(TOGGLE_LABELS.len() as u16 + 2),
                Constraint::Min(5),
                Constraint::Length(2),
            ])
            .split(area);

        Header::render(
            frame,
            chunks[0],
            "PawFeed - Settings",
            "App preferences and feeder details.",
        )?;

        let items: Vec<ListItem> = TOGGLE_LABELS
            .iter()
            .zip(self.toggles.iter())
            .map(|(label, on)| {
                let (mark, style) = if *on {
                    ("[on] ", t.success_style())
                } else {
                    ("[off]", t.muted_style())
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", mark), style),
                    Span::styled(*label, t.text_style()),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(t.border_style())
                    .title(" Preferences "),
            )
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        StatefulWidget::render(list, chunks[1], frame.buffer_mut(), &mut self.list_state);

        let info = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Device: ", t.muted_style()),
                Span::styled("PawFeed Station v2", t.text_style()),
            ]),
            Line::from(vec![
                Span::styled("Firmware: ", t.muted_style()),
                Span::styled("2.4.0", t.text_style()),
            ]),
            Line::from(vec![
                Span::styled("Wi-Fi: ", t.muted_style()),
                Span::styled("Connected", t.success_style()),
            ]),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(t.border_style())
                .title(" Feeder "),
        );
        frame.render_widget(info, chunks[2]);

        Footer::render(
            frame,
            chunks[3],
            "Navigate: ↑↓ | Toggle: Enter/Space | Back: Esc",
        )?;

        Ok(())
    }

    fn handle_event(&mut self, event: Event, _ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return Ok(ScreenAction::None);
            }
            match key.code {
                KeyCode::Up => self.list_state.select_previous(),
                KeyCode::Down => self.list_state.select_next(),
                KeyCode::Enter | KeyCode::Char(' ') => self.toggle_current(),
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => {
                    return Ok(ScreenAction::Navigate(ScreenId::Home));
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

    #[test]
    fn toggle_flips_only_the_cursor_row() {
        let mut settings = SettingsScreen::new();
        assert_eq!(settings.toggles(), [true, true, false]);
        settings.toggle_current();
        assert_eq!(settings.toggles(), [false, true, false]);
        settings.toggle_current();
        assert_eq!(settings.toggles(), [true, true, false]);
    }
}
