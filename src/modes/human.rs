use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::GameEngine;
use crate::input::KeyAction;
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::session::{GameSession, Ticker, tick_rearms};

/// Render at 30 FPS (33ms per frame)
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

pub struct HumanMode<R = rand::rngs::ThreadRng> {
    session: GameSession<R>,
    metrics: GameMetrics,
    renderer: Renderer,
    should_quit: bool,
}

impl<R: Rng> HumanMode<R> {
    pub fn new(engine: GameEngine<R>) -> Self {
        Self {
            session: GameSession::new(engine),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            "starting on a {}x{} board, one tick every {:?}",
            self.session.engine().config().grid_width,
            self.session.engine().config().grid_height,
            self.session.engine().config().tick_interval()
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;
        info!(
            "quit at score {} after {} restarts",
            self.session.state().score,
            self.metrics.resets
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut ticker = Ticker::new(self.session.engine().config().tick_interval());
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_event(event) {
                                ticker.rearm();
                            }
                        }
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = ticker.tick() => {
                    if self.update_game() {
                        ticker.rearm();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let config = self.session.engine().config();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.session.state(), config, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Apply a terminal event. Returns true when the tick clock must be re-armed.
    fn handle_event(&mut self, event: Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };

        match KeyAction::from_key_event(key) {
            Some(KeyAction::Steer(direction)) => {
                let changed = self.session.steer(direction);
                if changed {
                    debug!("steering {:?}", direction);
                }
                changed
            }
            Some(KeyAction::Restart) => {
                self.session.restart();
                self.metrics.on_reset();
                true
            }
            Some(KeyAction::Quit) => {
                self.should_quit = true;
                false
            }
            None => false,
        }
    }

    /// Run one tick. Returns true when the tick clock must be re-armed.
    fn update_game(&mut self) -> bool {
        let info = self.session.tick();
        if info.collision.is_some() {
            self.metrics.on_reset();
        }
        tick_rearms(&info)
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
