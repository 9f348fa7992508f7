//! Live camera feed screen.
//!
//! The video is simulated; the controller owns two independent session
//! toggles (recording, mute). Neither drives any capture pipeline.

use crate::components::Footer;
use crate::model::Pet;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::ui::Screen as ScreenId;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tracing::info;

/// Live session toggles. Independent booleans with no coupling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiveSessionState {
    pub is_recording: bool,
    pub is_muted: bool,
}

/// Live feed controller.
pub struct LiveFeedScreen {
    session: LiveSessionState,
    /// Pet currently "detected" in front of the camera (simulated).
    detected: Option<Pet>,
}

impl LiveFeedScreen {
    pub fn new(detected: Option<Pet>) -> Self {
        Self {
            session: LiveSessionState::default(),
            detected,
        }
    }

    pub fn session(&self) -> LiveSessionState {
        self.session
    }

    /// Flip the recording flag. No stream is captured.
    pub fn toggle_recording(&mut self) {
        self.session.is_recording = !self.session.is_recording;
        info!("recording toggled: {}", self.session.is_recording);
    }

    /// Flip the mute flag. No audio pipeline exists.
    pub fn toggle_mute(&mut self) {
        self.session.is_muted = !self.session.is_muted;
    }

    /// Snapshot stub; logs and does nothing else.
    pub fn take_snapshot(&self) {
        info!("snapshot requested (simulated)");
    }
}

impl Screen for LiveFeedScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(4),
                Constraint::Length(2),
            ])
            .split(area);

        // Simulated video area
        let live_badge = Span::styled(" ● LIVE ", t.error_style());
        let video = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .title(live_badge)
            .title_alignment(Alignment::Left);
        let video_inner = video.inner(chunks[0]);
        frame.render_widget(video, chunks[0]);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled("┌ camera feed (simulated) ┐", t.muted_style())),
            Line::from(""),
        ];
        if let Some(pet) = &self.detected {
            lines.push(Line::from(vec![
                Span::styled(format!("{} Detected: ", pet.glyph), t.text_style()),
                Span::styled(pet.name.clone(), t.emphasis_style()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("RFID Tag: {}", pet.tag_id),
                t.muted_style(),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Quality: HD 1080p", t.muted_style())));
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            video_inner,
        );

        // Session status
        let recording = if self.session.is_recording {
            Span::styled("● Recording…", t.error_style())
        } else {
            Span::styled("○ Not recording", t.muted_style())
        };
        let audio = if self.session.is_muted {
            Span::styled("🔇 Muted", t.muted_style())
        } else {
            Span::styled("🔊 Audio on", t.text_style())
        };
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(recording),
                Line::from(audio),
            ])
            .alignment(Alignment::Center),
            chunks[1],
        );

        Footer::render(
            frame,
            chunks[2],
            "Record: r | Mute: m | Snapshot: c | Back: Esc",
        )?;

        Ok(())
    }

    fn handle_event(&mut self, event: Event, _ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return Ok(ScreenAction::None);
            }
            match key.code {
                KeyCode::Char('r') => self.toggle_recording(),
                KeyCode::Char('m') => self.toggle_mute(),
                KeyCode::Char('c') => self.take_snapshot(),
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
    fn toggles_are_independent() {
        let mut live = LiveFeedScreen::new(None);
        assert_eq!(live.session(), LiveSessionState::default());

        live.toggle_recording();
        assert!(live.session().is_recording);
        assert!(!live.session().is_muted);

        live.toggle_mute();
        assert!(live.session().is_recording);
        assert!(live.session().is_muted);

        live.toggle_recording();
        assert!(!live.session().is_recording);
        assert!(live.session().is_muted);
    }
}
