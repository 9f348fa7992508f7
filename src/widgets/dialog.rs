//! Dialog widget for modal overlays
//!
//! A self-contained centered modal: clears the area behind it, draws a
//! bordered block with a title, body text and an optional footer hint.

use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Widget, Wrap};

/// Dialog variant for different visual styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogVariant {
    #[default]
    Default,
    Accent,
    Warning,
}

/// A centered modal dialog
pub struct Dialog<'a> {
    /// Title shown in the title block
    pub title: &'a str,
    /// Body lines
    pub content: Text<'a>,
    /// Width in columns (clamped to the area)
    pub width: u16,
    /// Height in rows (clamped to the area)
    pub height: u16,
    /// Visual variant (affects the border color)
    pub variant: DialogVariant,
    /// Footer hint shown under the body (optional)
    pub footer: Option<&'a str>,
}

impl<'a> Dialog<'a> {
    pub fn new(title: &'a str, content: impl Into<Text<'a>>) -> Self {
        Self {
            title,
            content: content.into(),
            width: 48,
            height: 12,
            variant: DialogVariant::Default,
            footer: None,
        }
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    pub fn variant(mut self, variant: DialogVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn footer(mut self, footer: &'a str) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Center a `width` x `height` rect inside `area`.
    fn centered(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let dialog_area = Self::centered(area, self.width, self.height);

        Clear.render(dialog_area, buf);

        let border_style = match self.variant {
            DialogVariant::Default => t.border_focused_style(),
            DialogVariant::Accent => t.accent_style(),
            DialogVariant::Warning => t.warning_style(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.title))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::new(2, 2, 1, 0))
            .style(t.background_style());

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        let (body_area, footer_area) = if self.footer.is_some() && inner.height > 1 {
            let body = Rect {
                height: inner.height - 1,
                ..inner
            };
            let footer = Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            };
            (body, Some(footer))
        } else {
            (inner, None)
        };

        Paragraph::new(self.content)
            .wrap(Wrap { trim: false })
            .render(body_area, buf);

        if let (Some(hint), Some(footer_area)) = (self.footer, footer_area) {
            Paragraph::new(hint)
                .style(theme().muted_style())
                .alignment(Alignment::Center)
                .render(footer_area, buf);
        }
    }
}
