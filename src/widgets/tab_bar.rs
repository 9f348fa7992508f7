//! Bottom navigation tab bar.

use crate::styles::theme;
use crate::ui::Tab;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Renders the four dashboard tabs with the active one highlighted.
pub struct TabBar {
    active: Tab,
}

impl TabBar {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(t.border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let tabs = Tab::all();
        let constraints = vec![Constraint::Ratio(1, tabs.len() as u32); tabs.len()];
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(inner);

        for (i, tab) in tabs.iter().enumerate() {
            let is_active = *tab == self.active;
            let style = if is_active {
                t.title_style()
            } else {
                t.muted_style()
            };
            let marker = if is_active { "●" } else { "○" };
            let label = format!("{} {} [{}]", marker, tab.label(), i + 1);
            Paragraph::new(label)
                .style(style)
                .alignment(Alignment::Center)
                .render(cells[i], buf);
        }
    }
}
