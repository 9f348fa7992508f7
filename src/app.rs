//! Application router and event loop.
//!
//! The app owns the navigator, the single active screen controller and
//! the terminal. Navigation replaces the active controller with a fresh
//! one, which is what guarantees that per-screen interaction state never
//! survives a transition away and back.

use crate::cli::Cli;
use crate::data::Catalog;
use crate::navigator::Navigator;
use crate::screens::{controller_for, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::tui::Tui;
use crate::ui::Screen as ScreenId;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tracing::info;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct App {
    tui: Tui,
    navigator: Navigator,
    active: Box<dyn Screen>,
    catalog: Catalog,
    should_quit: bool,
}

impl App {
    pub fn new(args: &Cli) -> Result<Self> {
        let catalog = Catalog::sample();
        let mut navigator = Navigator::new();
        if args.skip_intro {
            navigator.goto(ScreenId::Home);
        }
        let active = controller_for(navigator.current(), &catalog);
        Ok(Self {
            tui: Tui::new()?,
            navigator,
            active,
            catalog,
            should_quit: false,
        })
    }

    /// Run the event loop until a controller requests quit.
    pub fn run(&mut self) -> Result<()> {
        info!("starting on {:?}", self.navigator.current());
        self.tui.enter()?;

        let result = self.event_loop();

        // Always restore the terminal, even if the loop errored
        let exit_result = self.tui.exit();
        result.and(exit_result)
    }

    fn event_loop(&mut self) -> Result<()> {
        while !self.should_quit {
            self.draw()?;
            if let Some(event) = self.tui.poll_event(POLL_INTERVAL)? {
                self.handle_event(event)?;
            }
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        // Split the borrows so the draw closure can use the controller
        // and the catalog while the terminal is held mutably
        let Self {
            tui,
            active,
            catalog,
            ..
        } = self;
        let ctx = RenderContext::new(catalog);
        let mut render_result = Ok(());
        tui.terminal_mut().draw(|frame| {
            render_result = active.render(frame, frame.area(), &ctx);
        })?;
        render_result
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = &event {
            if key.kind == KeyEventKind::Press
                && key.code == KeyCode::Char('c')
                && key.modifiers.contains(KeyModifiers::CONTROL)
            {
                self.should_quit = true;
                return Ok(());
            }
        }

        let ctx = ScreenContext::new(&self.catalog);
        let action = self.active.handle_event(event, &ctx)?;
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(target) => self.navigate(target)?,
            ScreenAction::Quit => {
                info!("quit requested from {:?}", self.navigator.current());
                self.should_quit = true;
            }
        }
        Ok(())
    }

    /// Move to `target`, discarding the old controller.
    fn navigate(&mut self, target: ScreenId) -> Result<()> {
        self.navigator.goto(target);
        self.active = controller_for(target, &self.catalog);
        let ctx = ScreenContext::new(&self.catalog);
        self.active.on_enter(&ctx)
    }
}
