//! The [`PawfeedLogo`] widget renders the pawfeed wordmark.
use crate::styles::theme;
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::Widget;

/// A widget that renders the pawfeed logo
///
/// Comes in two sizes: `Small` (2 lines) for screen headers and
/// `Regular` (3 lines) for the splash screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PawfeedLogo {
    size: Size,
}

/// The size of the logo
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Size {
    /// A small logo (2 lines)
    #[default]
    Small,
    /// A regular logo (3 lines, box drawing characters)
    Regular,
}

impl PawfeedLogo {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    /// Create a new logo widget with a small size
    pub fn small() -> Self {
        Self::new(Size::Small)
    }

    /// Create a new logo widget with a regular size
    pub fn regular() -> Self {
        Self::new(Size::Regular)
    }
}

impl Widget for PawfeedLogo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo = match self.size {
            Size::Small => indoc! {"
                ᓚᘏᗢ pawfeed
                ──────•──────
            "},
            Size::Regular => indoc! {"
                ┏━┓┏━┓╻ ╻┏━╸┏━╸┏━╸╺┳┓
                ┣━┛┣━┫┃╻┃┣╸ ┣╸ ┣╸  ┃┃
                ╹  ╹ ╹┗┻┛╹  ┗━╸┗━╸╺┻┛
            "},
        };
        Text::styled(logo, theme().title_style()).render(area, buf);
    }
}
