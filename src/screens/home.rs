//! Dashboard hub screen.
//!
//! Owns the feed-now dialog (open flag + portion amount) and the active
//! bottom tab. Selecting the Live/Pets/Alerts tab also triggers a full
//! screen transition; the Home tab only updates the visual selection.

use crate::components::{Footer, Header};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::ui::{Screen as ScreenId, Tab};
use crate::widgets::{Dialog, DialogVariant, TabBar};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;
use tracing::info;

/// Smallest portion the feeder dispenses, in grams.
pub const PORTION_MIN: u32 = 0;
/// Largest portion the feeder dispenses, in grams.
pub const PORTION_MAX: u32 = 100;
/// Portion slider step, in grams.
pub const PORTION_STEP: u32 = 5;
/// Portion preselected when the dashboard is entered.
pub const PORTION_DEFAULT: u32 = 50;

/// Feed-now dialog state.
///
/// The portion is always a multiple of [`PORTION_STEP`] within
/// `[PORTION_MIN, PORTION_MAX]`. It is retained across dialog
/// open/close cycles within one visit to the dashboard and discarded
/// with the rest of the controller on navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedDialogState {
    pub open: bool,
    pub portion_grams: u32,
}

impl Default for FeedDialogState {
    fn default() -> Self {
        Self {
            open: false,
            portion_grams: PORTION_DEFAULT,
        }
    }
}

impl FeedDialogState {
    /// Store `grams`, clamped into range and snapped down to the step.
    ///
    /// Callers must not assume the stored value equals the raw input:
    /// `53` stores `50`, `-10` stores `0`, `1000` stores `100`.
    pub fn set_portion(&mut self, grams: i64) {
        let clamped = grams.clamp(i64::from(PORTION_MIN), i64::from(PORTION_MAX)) as u32;
        self.portion_grams = (clamped / PORTION_STEP) * PORTION_STEP;
    }

    pub fn step_up(&mut self) {
        self.set_portion(i64::from(self.portion_grams) + i64::from(PORTION_STEP));
    }

    pub fn step_down(&mut self) {
        self.set_portion(i64::from(self.portion_grams) - i64::from(PORTION_STEP));
    }
}

/// Dashboard controller.
pub struct HomeScreen {
    feed_dialog: FeedDialogState,
    active_tab: Tab,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            feed_dialog: FeedDialogState::default(),
            active_tab: Tab::Home,
        }
    }

    pub fn feed_dialog(&self) -> &FeedDialogState {
        &self.feed_dialog
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn open_feed_dialog(&mut self) {
        self.feed_dialog.open = true;
    }

    pub fn close_feed_dialog(&mut self) {
        self.feed_dialog.open = false;
    }

    pub fn set_portion(&mut self, grams: i64) {
        self.feed_dialog.set_portion(grams);
    }

    /// Close the dialog and fire the mocked feed-now action.
    ///
    /// Guarantees the dialog is closed afterwards regardless of prior
    /// state; no device is contacted.
    pub fn dispense(&mut self) {
        info!("dispense requested: {}g (simulated)", self.feed_dialog.portion_grams);
        self.feed_dialog.open = false;
    }

    /// Select a bottom tab. Returns the screen to navigate to when the
    /// selection leaves the dashboard.
    pub fn select_tab(&mut self, tab: Tab) -> Option<ScreenId> {
        self.active_tab = tab;
        match tab {
            Tab::Home => None,
            Tab::Live | Tab::Pets | Tab::Alerts => Some(tab.screen()),
        }
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let stats = &ctx.catalog.dashboard;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .split(area);

        let cells: Vec<Rect> = rows
            .iter()
            .flat_map(|row| {
                Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(*row)
                    .to_vec()
            })
            .collect();

        let feeder_status = if stats.feeder_online { "Online" } else { "Offline" };
        let feeder_style = if stats.feeder_online {
            t.success_style()
        } else {
            t.error_style()
        };
        let tiles: [(&str, String, ratatui::style::Style); 4] = [
            ("Last Feeding", stats.last_feeding.clone(), t.accent_style()),
            ("Next Scheduled", stats.next_scheduled.clone(), t.title_style()),
            (
                "Food Remaining",
                format!("{}%", stats.food_remaining_pct),
                t.success_style(),
            ),
            ("Feeder Status", feeder_status.to_string(), feeder_style),
        ];

        for (cell, (label, value, style)) in cells.iter().zip(tiles) {
            let tile = Paragraph::new(Line::from(vec![
                Span::styled(format!("{}: ", label), t.muted_style()),
                Span::styled(value, style),
            ]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(t.border_style()),
            );
            frame.render_widget(tile, *cell);
        }
    }

    fn render_quick_actions(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let actions = Paragraph::new(vec![
            Line::from(Span::styled("Quick Actions", t.title_style())),
            Line::from(vec![
                Span::styled("  Feed Now [f]", t.accent_style()),
                Span::styled("  dispense a portion right away", t.muted_style()),
            ]),
            Line::from(vec![
                Span::styled("  View Analytics [a]", t.text_style()),
                Span::styled("  check feeding patterns", t.muted_style()),
            ]),
            Line::from(vec![
                Span::styled("  Settings [o]", t.text_style()),
                Span::styled("  device and app preferences", t.muted_style()),
            ]),
        ]);
        frame.render_widget(actions, area);
    }

    fn render_feed_dialog(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let body = Text::from(vec![
            Line::from(Span::styled("Select portion size", t.muted_style())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Portion: ", t.text_style()),
                Span::styled(
                    format!("{}g", self.feed_dialog.portion_grams),
                    t.emphasis_style(),
                ),
            ]),
        ]);
        let dialog = Dialog::new("Feed Now", body)
            .width(44)
            .height(11)
            .variant(DialogVariant::Accent)
            .footer("◂ ▸ adjust | Enter dispense | Esc close");
        frame.render_widget(dialog, area);

        // Portion gauge inside the dialog body
        let gauge_area = Rect {
            x: area.x + area.width.saturating_sub(44) / 2 + 3,
            y: area.y + (area.height.saturating_sub(11)) / 2 + 6,
            width: 38.min(area.width),
            height: 1,
        };
        let gauge = Gauge::default()
            .gauge_style(t.accent_style())
            .ratio(f64::from(self.feed_dialog.portion_grams) / f64::from(PORTION_MAX))
            .label(format!("{}g", self.feed_dialog.portion_grams));
        frame.render_widget(gauge, gauge_area);
    }
}

impl Screen for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(6),
                Constraint::Min(4),
                Constraint::Length(2),
                Constraint::Length(2),
            ])
            .split(area);

        Header::render(
            frame,
            chunks[0],
            "PawFeed - Dashboard",
            "Hi, welcome back! Luna's feeder is ready.",
        )?;

        self.render_stats(frame, chunks[1], ctx);
        self.render_quick_actions(frame, chunks[2]);

        Footer::render(
            frame,
            chunks[3],
            "Tabs: 1-4 | Feed: f | Analytics: a | Settings: o | Quit: q",
        )?;
        frame.render_widget(TabBar::new(self.active_tab), chunks[4]);

        if self.feed_dialog.open {
            self.render_feed_dialog(frame, area);
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event, _ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return Ok(ScreenAction::None);
            }

            // Dialog keys take precedence while it is open
            if self.feed_dialog.open {
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => self.close_feed_dialog(),
                    KeyCode::Enter => self.dispense(),
                    KeyCode::Left | KeyCode::Char('-') => self.feed_dialog.step_down(),
                    KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                        self.feed_dialog.step_up();
                    }
                    _ => {}
                }
                return Ok(ScreenAction::None);
            }

            match key.code {
                KeyCode::Char('f') => self.open_feed_dialog(),
                KeyCode::Char('a') => return Ok(ScreenAction::Navigate(ScreenId::Analytics)),
                KeyCode::Char('o') => return Ok(ScreenAction::Navigate(ScreenId::Settings)),
                KeyCode::Char(c @ '1'..='4') => {
                    let index = (c as usize) - ('1' as usize);
                    if let Some(tab) = Tab::from_index(index) {
                        if let Some(target) = self.select_tab(tab) {
                            return Ok(ScreenAction::Navigate(target));
                        }
                    }
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

    #[test]
    fn portion_snaps_to_step_and_clamps() {
        let mut home = HomeScreen::new();
        home.set_portion(53);
        assert_eq!(home.feed_dialog().portion_grams, 50);
        home.set_portion(-10);
        assert_eq!(home.feed_dialog().portion_grams, 0);
        home.set_portion(1000);
        assert_eq!(home.feed_dialog().portion_grams, 100);
        for v in -20..220 {
            home.set_portion(v);
            let stored = home.feed_dialog().portion_grams;
            assert_eq!(stored % PORTION_STEP, 0);
            assert!(stored <= PORTION_MAX);
        }
    }

    #[test]
    fn stepping_stays_in_range() {
        let mut home = HomeScreen::new();
        home.set_portion(0);
        home.feed_dialog.step_down();
        assert_eq!(home.feed_dialog().portion_grams, 0);
        home.set_portion(100);
        home.feed_dialog.step_up();
        assert_eq!(home.feed_dialog().portion_grams, 100);
    }

    #[test]
    fn dispense_always_closes_the_dialog() {
        let mut home = HomeScreen::new();
        home.dispense();
        assert!(!home.feed_dialog().open);

        home.open_feed_dialog();
        assert!(home.feed_dialog().open);
        home.dispense();
        assert!(!home.feed_dialog().open);
    }

    #[test]
    fn portion_survives_dialog_reopen() {
        let mut home = HomeScreen::new();
        home.open_feed_dialog();
        home.set_portion(75);
        home.close_feed_dialog();
        home.open_feed_dialog();
        assert_eq!(home.feed_dialog().portion_grams, 75);
    }

    #[test]
    fn tab_selection_navigates_except_home() {
        let mut home = HomeScreen::new();
        assert_eq!(home.select_tab(Tab::Pets), Some(ScreenId::PetProfiles));
        assert_eq!(home.active_tab(), Tab::Pets);
        assert_eq!(home.select_tab(Tab::Live), Some(ScreenId::LiveFeed));
        assert_eq!(home.select_tab(Tab::Alerts), Some(ScreenId::Notifications));
        assert_eq!(home.select_tab(Tab::Home), None);
        assert_eq!(home.active_tab(), Tab::Home);
    }

    #[test]
    fn portion_changes_never_navigate() {
        let mut home = HomeScreen::new();
        home.open_feed_dialog();
        home.set_portion(95);
        // Only the dialog state changed; tab and navigation untouched
        assert_eq!(home.active_tab(), Tab::Home);
        assert!(home.feed_dialog().open);
    }
}
