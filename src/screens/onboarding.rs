//! Onboarding slides.
//!
//! Three fixed slides with next/skip/jump controls. The slide index is
//! always a valid index into the slide collection; out-of-range jumps
//! are clamped, never errors. Advancing past the last slide signals
//! completion instead of incrementing.

use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::ui::Screen as ScreenId;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use tracing::info;

/// One onboarding slide.
struct Slide {
    glyph: &'static str,
    title: &'static str,
    description: &'static str,
}

const SLIDES: [Slide; 3] = [
    Slide {
        glyph: "⏰",
        title: "Feed Smarter",
        description: "Automate feeding schedules and never miss a meal. \
                      Set custom portions and times for your pets.",
    },
    Slide {
        glyph: "📹",
        title: "Stay Connected",
        description: "Watch your pets eat with live video feed. \
                      Dispense food remotely with just a tap.",
    },
    Slide {
        glyph: "📈",
        title: "Track Nutrition",
        description: "Monitor feeding patterns and track your pet's health \
                      with detailed analytics and history.",
    },
];

/// Onboarding controller: slide index plus a completion latch.
pub struct OnboardingScreen {
    slide: usize,
    completed: bool,
}

impl Default for OnboardingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingScreen {
    pub fn new() -> Self {
        Self {
            slide: 0,
            completed: false,
        }
    }

    pub fn slide(&self) -> usize {
        self.slide
    }

    pub fn slide_count() -> usize {
        SLIDES.len()
    }

    /// Advance one slide. Returns `true` the single time the last slide
    /// is advanced past; the caller navigates on that signal.
    pub fn next(&mut self) -> bool {
        if self.slide + 1 < SLIDES.len() {
            self.slide += 1;
            false
        } else if self.completed {
            false
        } else {
            self.completed = true;
            true
        }
    }

    /// Complete immediately regardless of the current slide.
    pub fn skip(&mut self) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        true
    }

    /// Jump to a slide directly (pagination dot). Clamped into range.
    pub fn jump_to(&mut self, index: usize) {
        self.slide = index.min(SLIDES.len() - 1);
    }

    pub fn previous(&mut self) {
        self.slide = self.slide.saturating_sub(1);
    }
}

impl Screen for OnboardingScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let slide = &SLIDES[self.slide];

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Percentage(30),
                Constraint::Length(6),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(2),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new("Skip [s]")
                .style(t.muted_style())
                .alignment(Alignment::Right),
            chunks[0],
        );

        let body = Paragraph::new(vec![
            Line::from(Span::styled(slide.glyph, t.accent_style())),
            Line::from(""),
            Line::from(Span::styled(slide.title, t.title_style())),
            Line::from(""),
            Line::from(Span::styled(slide.description, t.text_style())),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(body, chunks[2]);

        // Pagination dots
        let dots: String = (0..SLIDES.len())
            .map(|i| if i == self.slide { "━━" } else { "••" })
            .collect::<Vec<_>>()
            .join(" ");
        frame.render_widget(
            Paragraph::new(dots)
                .style(t.title_style())
                .alignment(Alignment::Center),
            chunks[4],
        );

        let hint = if self.slide + 1 < SLIDES.len() {
            "Continue [Enter] »"
        } else {
            "Get Started [Enter]"
        };
        frame.render_widget(
            Paragraph::new(hint)
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
                KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') => {
                    if self.next() {
                        info!("onboarding complete at slide {}", self.slide);
                        return Ok(ScreenAction::Navigate(ScreenId::Login));
                    }
                }
                KeyCode::Char('s') => {
                    if self.skip() {
                        info!("onboarding skipped at slide {}", self.slide);
                        return Ok(ScreenAction::Navigate(ScreenId::Login));
                    }
                }
                KeyCode::Left => self.previous(),
                KeyCode::Char(c @ '1'..='9') => {
                    let index = (c as usize) - ('1' as usize);
                    self.jump_to(index);
                }
                KeyCode::Char('q') => return Ok(ScreenAction::Quit),
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
    fn slide_index_stays_in_bounds() {
        let mut onboarding = OnboardingScreen::new();
        assert_eq!(onboarding.slide(), 0);
        onboarding.jump_to(100);
        assert_eq!(onboarding.slide(), OnboardingScreen::slide_count() - 1);
        onboarding.jump_to(0);
        onboarding.previous();
        assert_eq!(onboarding.slide(), 0);
    }

    #[test]
    fn next_completes_exactly_once() {
        let mut onboarding = OnboardingScreen::new();
        assert!(!onboarding.next()); // 0 -> 1
        assert!(!onboarding.next()); // 1 -> 2
        assert!(onboarding.next()); // complete
        assert_eq!(onboarding.slide(), 2);
        assert!(!onboarding.next()); // no second completion signal
        assert_eq!(onboarding.slide(), 2);
    }

    #[test]
    fn skip_completes_from_any_slide() {
        let mut onboarding = OnboardingScreen::new();
        assert!(onboarding.skip());
        assert!(!onboarding.skip());

        let mut onboarding = OnboardingScreen::new();
        onboarding.next();
        assert!(onboarding.skip());
    }
}
