use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::game::{Game, StepInfo, TickClock};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Keyboard-driven game in the terminal
pub struct HumanMode {
    game: Game,
    clock: TickClock,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    frame_interval: Duration,
    should_quit: bool,
}

impl HumanMode {
    /// `seed` makes food placement reproducible
    pub fn new(config: AppConfig, seed: Option<u64>) -> Self {
        let game = match seed {
            Some(seed) => Game::with_seed(config.game, seed),
            None => Game::new(config.game),
        };

        Self {
            game,
            clock: TickClock::new(),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(config.palette),
            input_handler: InputHandler::new(),
            frame_interval: Duration::from_millis(config.frame_interval_ms),
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

        let grid = self.game.grid();
        info!(width = grid.width(), height = grid.height(), "game started");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            games = self.metrics.games_played,
            wins = self.metrics.games_won,
            high_score = self.metrics.high_score,
            "session finished"
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // One simulation update and one draw per frame; the game decides
        // on its own clock when the snake actually moves
        let mut frame_timer = interval(self.frame_interval);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(&event),
                        Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Update and render frame
                _ = frame_timer.tick() => {
                    self.update_game();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.game.view(), &self.metrics);
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

    fn handle_event(&mut self, event: &Event) {
        match self.input_handler.handle_event(event) {
            KeyAction::Move(direction) => self.game.request_direction(direction),
            KeyAction::Restart => self.reset_game(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self) -> StepInfo {
        let info = self.game.update(self.clock.now_ms());

        if info.ate_food {
            debug!(score = self.game.score(), length = self.game.snake().size(), "snake grew");
        }

        if let Some(outcome) = info.outcome {
            self.metrics.on_game_over(self.game.score(), outcome);
        }

        self.metrics.update();
        info
    }

    fn reset_game(&mut self) {
        if self.game.status().is_running() {
            self.metrics.on_game_abandoned(self.game.score());
        }
        self.game.reset();
        self.metrics.on_game_start();
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameConfig, GameStatus, Outcome};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn tiny_mode() -> HumanMode {
        let config = AppConfig {
            game: GameConfig::tiny(),
            ..Default::default()
        };
        HumanMode::new(config, Some(7))
    }

    #[test]
    fn test_game_initialization() {
        let mode = tiny_mode();
        assert_eq!(mode.game.status(), GameStatus::Running);
        assert_eq!(mode.game.score(), 0);
        assert_eq!(mode.frame_interval, Duration::from_millis(16));
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_movement_keys_request_direction() {
        let mut mode = tiny_mode();
        mode.handle_event(&key(KeyCode::Char('s')));
        assert_eq!(mode.game.requested_direction(), Direction::Down);

        mode.handle_event(&key(KeyCode::Up));
        assert_eq!(mode.game.requested_direction(), Direction::Up);
    }

    #[test]
    fn test_quit_key() {
        let mut mode = tiny_mode();
        mode.handle_event(&key(KeyCode::Char('x')));
        assert!(!mode.should_quit);

        mode.handle_event(&key(KeyCode::Char('q')));
        assert!(mode.should_quit);
    }

    #[test]
    fn test_restart_key_resets_game() {
        let mut mode = HumanMode::new(
            AppConfig {
                game: GameConfig::new(1, 1),
                ..Default::default()
            },
            Some(1),
        );

        // A one-cell board is full from the start
        let info = mode.update_game();
        assert_eq!(info.outcome, Some(Outcome::Won));
        assert_eq!(mode.metrics.games_played, 1);
        assert_eq!(mode.metrics.games_won, 1);

        mode.handle_event(&key(KeyCode::Char('r')));
        assert_eq!(mode.game.status(), GameStatus::Running);
        assert_eq!(mode.game.score(), 0);
    }

    #[test]
    fn test_restart_mid_game_keeps_high_score() {
        let mut mode = HumanMode::new(AppConfig::default(), Some(3));

        // Steer the one-cell snake onto the food: along the row, then down
        let mut now = 0;
        mode.game.update(now);
        while mode.game.score() == 0 && now < 10_000 {
            let head = mode.game.snake().head_position();
            let food = mode.game.food().position().unwrap();
            let direction = if head.x != food.x {
                Direction::Right
            } else {
                Direction::Down
            };
            mode.game.request_direction(direction);

            now += 200;
            mode.game.update(now);
        }
        assert_eq!(mode.game.score(), 10);
        assert_eq!(mode.game.status(), GameStatus::Running);

        mode.handle_event(&key(KeyCode::Char('r')));

        assert_eq!(mode.game.score(), 0);
        assert_eq!(mode.metrics.high_score, 10);
        assert_eq!(mode.metrics.games_played, 1);
        assert_eq!(mode.metrics.games_won, 0);
    }
}
