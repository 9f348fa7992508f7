use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Common footer component showing key hints
pub struct Footer;

impl Footer {
    /// Render a footer with the given hint text.
    ///
    /// Segments are separated by " | "; a "Label: keys" segment gets the
    /// keys highlighted.
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> Result<u16> {
        let t = theme();
        let parts: Vec<&str> = text.split(" | ").collect();
        let mut spans = Vec::new();

        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }

            if let Some((label, keys)) = part.split_once(": ") {
                spans.push(Span::styled(format!("{}: ", label), t.title_style()));
                spans.push(Span::styled(keys.to_string(), t.emphasis_style()));
            } else {
                spans.push(Span::styled((*part).to_string(), t.text_style()));
            }
        }

        let footer_block = Block::default()
            .borders(Borders::TOP)
            .border_style(t.border_style());
        let inner = footer_block.inner(area);
        frame.render_widget(footer_block, area);
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);

        Ok(2)
    }
}
