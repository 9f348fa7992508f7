//! Pet profiles screen.
//!
//! Shows the registered pets; selecting one opens a detail dialog with
//! its feeding history and schedule. The add-pet flow is a stub dialog:
//! "start scanning" is a placeholder, no RFID hardware exists.

use crate::components::{Footer, Header};
use crate::model::{FeedingPoint, MealSlot, MealStatus, Pet, PetId};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::ui::Screen as ScreenId;
use crate::widgets::{Dialog, DialogVariant};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Sparkline, StatefulWidget};
use ratatui::Frame;
use tracing::info;

/// Pet profiles controller.
///
/// `selected` is a weak reference by id into the pet collection; it
/// never owns a pet and is cleared when the detail dialog closes.
pub struct PetProfilesScreen {
    pets: Vec<Pet>,
    history: Vec<FeedingPoint>,
    schedule: Vec<MealSlot>,
    list_state: ListState,
    selected: Option<PetId>,
    add_dialog_open: bool,
}

impl PetProfilesScreen {
    pub fn new(pets: Vec<Pet>, history: Vec<FeedingPoint>, schedule: Vec<MealSlot>) -> Self {
        let mut list_state = ListState::default();
        if !pets.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            pets,
            history,
            schedule,
            list_state,
            selected: None,
            add_dialog_open: false,
        }
    }

    pub fn selected(&self) -> Option<PetId> {
        self.selected
    }

    pub fn add_dialog_open(&self) -> bool {
        self.add_dialog_open
    }

    /// Open the detail dialog for the pet with `id`.
    ///
    /// A request naming an id that is not in the collection is a no-op,
    /// never an error.
    pub fn select_pet(&mut self, id: PetId) {
        if self.pets.iter().any(|pet| pet.id == id) {
            self.selected = Some(id);
        }
    }

    /// Close the detail dialog and clear the selection.
    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn open_add_dialog(&mut self) {
        self.add_dialog_open = true;
    }

    pub fn close_add_dialog(&mut self) {
        self.add_dialog_open = false;
    }

    /// Placeholder for the RFID pairing flow.
    pub fn start_scanning(&self) {
        info!("tag scan requested (no reader attached)");
    }

    fn selected_pet(&self) -> Option<&Pet> {
        self.selected.and_then(|id| self.pets.iter().find(|p| p.id == id))
    }

    fn cursor_pet_id(&self) -> Option<PetId> {
        self.list_state
            .selected()
            .and_then(|i| self.pets.get(i))
            .map(|pet| pet.id)
    }

    fn render_detail_dialog(&self, frame: &mut Frame, area: Rect) {
        let Some(pet) = self.selected_pet() else {
            return;
        };
        let t = theme();

        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("{} {} ", pet.glyph, pet.name), t.title_style()),
                Span::styled(pet.tag_id.clone(), t.muted_style()),
            ]),
            Line::from(vec![
                Span::styled("Weight: ", t.muted_style()),
                Span::styled(format!("{} kg", pet.weight_kg), t.text_style()),
                Span::styled("   Food: ", t.muted_style()),
                Span::styled(pet.food_type.clone(), t.text_style()),
            ]),
            Line::from(""),
            Line::from(Span::styled("Feeding History (g/day)", t.title_style())),
            Line::from(""), // sparkline drawn over this row
            Line::from(""),
            Line::from(Span::styled("Feeding Schedule", t.title_style())),
        ];
        for slot in &self.schedule {
            let status_style = match slot.status {
                MealStatus::Active => t.success_style(),
                MealStatus::Pending => t.warning_style(),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", slot.label), t.text_style()),
                Span::styled(format!("{} • {}g ", slot.time, slot.grams), t.muted_style()),
                Span::styled(slot.status.label(), status_style),
            ]));
        }

        let dialog = Dialog::new("Pet Details", Text::from(lines))
            .width(52)
            .height(15)
            .footer("Esc close");
        frame.render_widget(dialog, area);

        // Sparkline across the history row of the dialog body
        let spark_area = Rect {
            x: area.x + area.width.saturating_sub(52) / 2 + 3,
            y: area.y + area.height.saturating_sub(15) / 2 + 6,
            width: 46.min(area.width),
            height: 1,
        };
        let series: Vec<u64> = self.history.iter().map(|p| u64::from(p.grams)).collect();
        let sparkline = Sparkline::default()
            .data(&series)
            .style(t.title_style());
        frame.render_widget(sparkline, spark_area);
    }

    fn render_add_dialog(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let body = Text::from(vec![
            Line::from(Span::styled("＋", t.title_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Scan your pet's RFID tag to add them to the system",
                t.text_style(),
            )),
        ]);
        let dialog = Dialog::new("Add New Pet", body)
            .width(46)
            .height(10)
            .variant(DialogVariant::Accent)
            .footer("Start Scanning [s] | Esc close");
        frame.render_widget(dialog, area);
    }
}

impl Screen for PetProfilesScreen {
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
            "PawFeed - Pet Profiles",
            "Your registered pets. Select one for history and schedule.",
        )?;

        let items: Vec<ListItem> = self
            .pets
            .iter()
            .map(|pet| {
                let line = Line::from(vec![
                    Span::styled(format!("{} ", pet.glyph), t.text_style()),
                    Span::styled(pet.name.clone(), t.text_style()),
                    Span::styled(
                        format!("  {} • {}", pet.species.label(), pet.tag_id),
                        t.muted_style(),
                    ),
                ]);
                ListItem::new(line)
            })
            .chain(std::iter::once(ListItem::new(Line::from(Span::styled(
                "＋ Add Pet [n]",
                t.title_style(),
            )))))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(t.border_style())
                    .title(" Pets "),
            )
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        StatefulWidget::render(list, chunks[1], frame.buffer_mut(), &mut self.list_state);

        Footer::render(
            frame,
            chunks[2],
            "Navigate: ↑↓ | Open: Enter | Add: n | Back: Esc",
        )?;

        if self.selected.is_some() {
            self.render_detail_dialog(frame, area);
        } else if self.add_dialog_open {
            self.render_add_dialog(frame, area);
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event, _ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return Ok(ScreenAction::None);
            }

            if self.selected.is_some() {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                    self.close_detail();
                }
                return Ok(ScreenAction::None);
            }

            if self.add_dialog_open {
                match key.code {
                    KeyCode::Char('s') => self.start_scanning(),
                    KeyCode::Esc | KeyCode::Char('q') => self.close_add_dialog(),
                    _ => {}
                }
                return Ok(ScreenAction::None);
            }

            match key.code {
                KeyCode::Up => self.list_state.select_previous(),
                KeyCode::Down => self.list_state.select_next(),
                KeyCode::Enter => {
                    // Last row is the add-pet card
                    if self.list_state.selected() == Some(self.pets.len()) {
                        self.open_add_dialog();
                    } else if let Some(id) = self.cursor_pet_id() {
                        self.select_pet(id);
                    }
                }
                KeyCode::Char('n') => self.open_add_dialog(),
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

    fn screen() -> PetProfilesScreen {
        let catalog = Catalog::sample();
        PetProfilesScreen::new(
            catalog.pets.clone(),
            catalog.feeding_history.clone(),
            catalog.schedule.clone(),
        )
    }

    #[test]
    fn select_then_close_clears_selection() {
        let mut pets = screen();
        pets.select_pet(PetId(2));
        assert_eq!(pets.selected(), Some(PetId(2)));
        pets.close_detail();
        assert_eq!(pets.selected(), None);
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let mut pets = screen();
        pets.select_pet(PetId(42));
        assert_eq!(pets.selected(), None);

        pets.select_pet(PetId(1));
        pets.select_pet(PetId(42));
        // Prior selection is untouched by the bad request
        assert_eq!(pets.selected(), Some(PetId(1)));
    }

    #[test]
    fn add_dialog_toggles() {
        let mut pets = screen();
        assert!(!pets.add_dialog_open());
        pets.open_add_dialog();
        assert!(pets.add_dialog_open());
        pets.start_scanning(); // placeholder, no state change
        assert!(pets.add_dialog_open());
        pets.close_add_dialog();
        assert!(!pets.add_dialog_open());
    }
}
