//! Analytics screen.
//!
//! Read-only presentation of the weekly intake chart, the time-of-day
//! distribution, and the summary figures. The controller holds no
//! interaction state beyond existing; every value comes from the shared
//! catalog at render time.

use crate::components::{Footer, Header};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::ui::Screen as ScreenId;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

/// Analytics controller. Stateless by design.
pub struct AnalyticsScreen;

impl Default for AnalyticsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_intake_chart(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let styles = [t.title_style(), t.accent_style()];
        let groups: Vec<BarGroup> = ctx
            .catalog
            .weekly_intake
            .iter()
            .map(|day| {
                let bars: Vec<Bar> = day
                    .grams
                    .iter()
                    .enumerate()
                    .map(|(i, grams)| {
                        Bar::default()
                            .value(u64::from(*grams))
                            .style(styles[i % styles.len()])
                            .text_value(String::new())
                    })
                    .collect();
                BarGroup::default().label(Line::from(day.day)).bars(&bars)
            })
            .collect();

        let legend: Vec<Span> = ctx
            .catalog
            .pets
            .iter()
            .enumerate()
            .flat_map(|(i, pet)| {
                [
                    Span::styled("■ ", styles[i % styles.len()]),
                    Span::styled(format!("{}  ", pet.name), t.muted_style()),
                ]
            })
            .collect();

        let mut chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(t.border_style())
                    .title(" Weekly Intake (g) ")
                    .title_bottom(Line::from(legend)),
            )
            .bar_width(3)
            .bar_gap(0)
            .group_gap(2);
        for group in groups {
            chart = chart.data(group);
        }
        frame.render_widget(chart, area);
    }

    fn render_distribution(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let lines: Vec<Line> = ctx
            .catalog
            .time_distribution
            .iter()
            .map(|share| {
                // One block glyph per 5 percent keeps the bar in width
                let filled = usize::from(share.percent) / 5;
                Line::from(vec![
                    Span::styled(format!("{:<18}", share.label), t.text_style()),
                    Span::styled("█".repeat(filled), t.title_style()),
                    Span::styled(format!(" {}%", share.percent), t.muted_style()),
                ])
            })
            .collect();
        let panel = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(t.border_style())
                .title(" Feeding Time Distribution "),
        );
        frame.render_widget(panel, area);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let summary = &ctx.catalog.weekly_summary;
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);
        let figures = [
            (format!("{}", summary.total_meals), "Meals This Week"),
            (format!("{} kg", summary.food_used_kg), "Food Used"),
            (format!("{}%", summary.on_schedule_pct), "On Schedule"),
        ];
        for (cell, (value, label)) in cells.iter().zip(figures) {
            let tile = Paragraph::new(vec![
                Line::from(Span::styled(value, t.emphasis_style())),
                Line::from(Span::styled(label, t.muted_style())),
            ])
            .centered()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(t.border_style()),
            );
            frame.render_widget(tile, *cell);
        }
    }
}

impl Screen for AnalyticsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(8),
                Constraint::Length(6),
                Constraint::Length(4),
                Constraint::Length(2),
            ])
            .split(area);

        Header::render(
            frame,
            chunks[0],
            "PawFeed - Analytics",
            "Feeding trends for the past week.",
        )?;
        self.render_intake_chart(frame, chunks[1], ctx);
        self.render_distribution(frame, chunks[2], ctx);
        self.render_summary(frame, chunks[3], ctx);
        Footer::render(frame, chunks[4], "Back: Esc")?;

        Ok(())
    }

    fn handle_event(&mut self, event: Event, _ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return Ok(ScreenAction::None);
            }
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q')
            ) {
                return Ok(ScreenAction::Navigate(ScreenId::Home));
            }
        }
        Ok(ScreenAction::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Catalog;
    use crossterm::event::{KeyEvent, KeyModifiers};

    #[test]
    fn only_back_keys_navigate() -> Result<()> {
        let catalog = Catalog::sample();
        let ctx = ScreenContext::new(&catalog);
        let mut analytics = AnalyticsScreen::new();

        let stay = Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(analytics.handle_event(stay, &ctx)?, ScreenAction::None);

        let back = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(
            analytics.handle_event(back, &ctx)?,
            ScreenAction::Navigate(ScreenId::Home)
        );
        Ok(())
    }
}
