use crate::styles::theme;
use crate::widgets::PawfeedLogo;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Common header component for all screens
pub struct Header;

impl Header {
    /// Render a header with title and description.
    ///
    /// Logo on the left, description on the right, title centered in the
    /// border. Returns the height used.
    pub fn render(frame: &mut Frame, area: Rect, title: &str, description: &str) -> Result<u16> {
        let t = theme();
        let header_block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", title))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(ratatui::widgets::Padding::new(1, 1, 0, 0));

        let inner_area = header_block.inner(area);
        frame.render_widget(header_block, area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(22), // Logo width
                Constraint::Min(0),     // Description
            ])
            .split(inner_area);

        frame.render_widget(PawfeedLogo::small(), horizontal_chunks[0]);

        let desc = Paragraph::new(description)
            .style(t.muted_style())
            .wrap(Wrap { trim: true });
        frame.render_widget(desc, horizontal_chunks[1]);

        Ok(area.height)
    }
}
