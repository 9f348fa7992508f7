//! Notifications screen.
//!
//! Presents the alert feed partitioned into "Today" and "Earlier" by
//! position. The dismiss and clear-all affordances are wired to a
//! working copy of the static collection; the source catalog is never
//! mutated and the list resets on the next visit.

use crate::components::{Footer, Header};
use crate::data::NOTIFICATIONS_TODAY;
use crate::model::{Notification, NotificationKind};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::ui::Screen as ScreenId;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget};
use ratatui::Frame;
use tracing::debug;

/// Notifications controller over a working copy of the alert feed.
pub struct NotificationsScreen {
    items: Vec<Notification>,
    list_state: ListState,
}

impl NotificationsScreen {
    pub fn new(items: Vec<Notification>) -> Self {
        let mut list_state = ListState::default();
        if !items.is_empty() {
            list_state.select(Some(0));
        }
        Self { items, list_state }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Remove the notification with `id`. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u32) {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        if self.items.len() != before {
            debug!("dismissed notification {}", id);
            let last = self.items.len().saturating_sub(1);
            if let Some(cursor) = self.list_state.selected() {
                if cursor > last {
                    self.list_state.select(if self.items.is_empty() {
                        None
                    } else {
                        Some(last)
                    });
                }
            }
        }
    }

    /// Empty the working list.
    pub fn clear_all(&mut self) {
        self.items.clear();
        self.list_state.select(None);
    }

    fn selected_id(&self) -> Option<u32> {
        self.list_state
            .selected()
            .and_then(|i| self.items.get(i))
            .map(|n| n.id)
    }

    fn item_line(&self, index: usize, notification: &Notification) -> Line<'static> {
        let t = theme();
        let (glyph, style) = match notification.kind {
            NotificationKind::Success => ("✔", t.success_style()),
            NotificationKind::Warning => ("▲", t.warning_style()),
            NotificationKind::Info => ("ℹ", t.title_style()),
        };
        let section = if index < NOTIFICATIONS_TODAY.min(self.items.len()) {
            "Today  "
        } else {
            "Earlier"
        };
        let unread = if notification.unread { "●" } else { " " };
        Line::from(vec![
            Span::styled(format!("{} ", unread), t.title_style()),
            Span::styled(format!("{} ", glyph), style),
            Span::styled(notification.title.clone(), t.text_style()),
            Span::styled(
                format!("  {} · {}", notification.message, notification.relative_time),
                t.muted_style(),
            ),
            Span::styled(format!("  [{}]", section), t.muted_style()),
        ])
    }
}

impl Screen for NotificationsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(4),
                Constraint::Length(2),
            ])
            .split(area);

        Header::render(
            frame,
            chunks[0],
            "PawFeed - Notifications",
            "Feeder alerts and reminders.",
        )?;

        if self.items.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("No notifications", t.title_style())),
                Line::from(Span::styled(
                    "You're all caught up! Check back later for updates.",
                    t.muted_style(),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(empty, chunks[1]);
        } else {
            let items: Vec<ListItem> = self
                .items
                .iter()
                .enumerate()
                .map(|(i, n)| ListItem::new(self.item_line(i, n)))
                .collect();
            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(t.border_style())
                        .title(" Alerts "),
                )
                .highlight_style(t.highlight_style())
                .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
            StatefulWidget::render(list, chunks[1], frame.buffer_mut(), &mut self.list_state);
        }

        Footer::render(
            frame,
            chunks[2],
            "Navigate: ↑↓ | Dismiss: d | Clear All: c | Back: Esc",
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
                KeyCode::Char('d') | KeyCode::Delete => {
                    if let Some(id) = self.selected_id() {
                        self.dismiss(id);
                    }
                }
                KeyCode::Char('c') => self.clear_all(),
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
    use crate::data::Catalog;

    fn screen() -> NotificationsScreen {
        NotificationsScreen::new(Catalog::sample().notifications)
    }

    #[test]
    fn dismiss_removes_only_the_matching_id() {
        let mut alerts = screen();
        let before = alerts.items().len();
        alerts.dismiss(2);
        assert_eq!(alerts.items().len(), before - 1);
        assert!(alerts.items().iter().all(|n| n.id != 2));
    }

    #[test]
    fn dismiss_unknown_id_is_a_noop() {
        let mut alerts = screen();
        let before = alerts.items().len();
        alerts.dismiss(999);
        assert_eq!(alerts.items().len(), before);
    }

    #[test]
    fn clear_all_empties_the_list() {
        let mut alerts = screen();
        alerts.clear_all();
        assert!(alerts.items().is_empty());
        // Still safe to operate on an empty list
        alerts.dismiss(1);
        alerts.clear_all();
        assert!(alerts.items().is_empty());
    }

    #[test]
    fn working_copy_leaves_the_catalog_untouched() {
        let catalog = Catalog::sample();
        let mut alerts = NotificationsScreen::new(catalog.notifications.clone());
        alerts.clear_all();
        assert!(!catalog.notifications.is_empty());
    }
}
