use std::time::{Duration, Instant};

use crate::game::Outcome;

/// Statistics kept across games in one session
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    pub games_won: u32,
    clock_running: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            games_won: 0,
            clock_running: true,
        }
    }

    /// Refresh the play time; frozen once the game has ended
    pub fn update(&mut self) {
        if self.clock_running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.clock_running = true;
    }

    pub fn on_game_over(&mut self, final_score: u32, outcome: Outcome) {
        self.update();
        self.clock_running = false;
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);

        if outcome == Outcome::Won {
            self.games_won += 1;
        }
    }

    /// A game left by restarting before it ended
    pub fn on_game_abandoned(&mut self, score: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
