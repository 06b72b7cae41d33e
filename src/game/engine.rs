use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use super::{
    action::Direction,
    config::GameConfig,
    food::Food,
    grid::Grid,
    snake::Snake,
    tick::TickTimer,
    view::{segment_alpha, GameStatus, GameView, Outcome, Segment},
};

/// Heading of a freshly created snake
pub const INITIAL_HEADING: Direction = Direction::Right;

/// Information about one call to [`Game::update`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Whether the snake advanced a cell
    pub moved: bool,
    /// Whether the snake ate food
    pub ate_food: bool,
    /// Set when the game ended during this update
    pub outcome: Option<Outcome>,
}

/// Owns the snake and the food and runs the game rules
pub struct Game {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Food,
    score: u32,
    status: GameStatus,
    requested: Direction,
    timer: TickTimer,
    rng: StdRng,
}

impl Game {
    /// Create a game with a randomly seeded food generator
    ///
    /// `config` must pass [`GameConfig::validate`]; a board side outside
    /// `1..=MAX_GRID_DIM` cannot be played on.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a game whose food placement is reproducible.
    /// Same precondition on `config` as [`Game::new`].
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        debug_assert!(config.validate().is_ok(), "{:?}", config.validate());

        let grid = config.grid();
        let timer = TickTimer::new(config.tick_interval_ms);

        let mut game = Self {
            snake: Snake::new(grid, grid.center(), INITIAL_HEADING),
            food: Food::new(grid),
            config,
            grid,
            score: 0,
            status: GameStatus::Running,
            requested: INITIAL_HEADING,
            timer,
            rng,
        };
        game.place_food();
        game
    }

    /// Start over with a fresh snake and food
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.grid, self.grid.center(), INITIAL_HEADING);
        self.food = Food::new(self.grid);
        self.place_food();
        self.score = 0;
        self.status = GameStatus::Running;
        self.requested = INITIAL_HEADING;
        self.timer.rearm();

        info!(
            width = self.grid.width(),
            height = self.grid.height(),
            "game reset"
        );
    }

    /// Remember the heading to apply on the next move
    pub fn request_direction(&mut self, direction: Direction) {
        if self.status.is_running() {
            self.requested = direction;
        }
    }

    /// Advance the simulation to `now_ms`, called once per frame
    pub fn update(&mut self, now_ms: u64) -> StepInfo {
        let mut info = StepInfo::default();

        if !self.status.is_running() {
            return info;
        }

        // Judge the board as it was left by the previous move
        if let Some(outcome) = self.check_end() {
            self.status = GameStatus::Ended(outcome);
            info.outcome = Some(outcome);
            info!(?outcome, score = self.score, length = self.snake.size(), "game over");
            return info;
        }

        if self.timer.is_due(now_ms) && !self.board_full() {
            self.snake.set_direction(self.requested);
            self.snake.update();
            info.moved = true;
        }

        if self.food.position() == Some(self.snake.head_position()) {
            self.snake.set_grow();
            self.score += self.config.score_per_food;
            self.place_food();
            info.ate_food = true;

            debug!(score = self.score, food = ?self.food.position(), "food eaten");
        }

        info
    }

    fn check_end(&self) -> Option<Outcome> {
        if self.snake.self_collides() {
            Some(Outcome::Lost)
        } else if self.board_full() {
            Some(Outcome::Won)
        } else {
            None
        }
    }

    fn board_full(&self) -> bool {
        self.snake.size() >= self.grid.total_cells()
    }

    /// Put the food on a cell the snake does not cover
    fn place_food(&mut self) {
        let total = self.grid.total_cells();
        let size = self.snake.size();

        if size >= total {
            self.food.clear();
            return;
        }

        // Past 80% coverage, sample the free cells directly
        if size * 5 > total * 4 {
            let snake = &self.snake;
            self.food.generate_excluding(&mut self.rng, |cell| snake.body_contains(cell, 0));
            return;
        }

        loop {
            let cell = self.food.generate(&mut self.rng);
            if !self.snake.body_contains(cell, 0) {
                break;
            }
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn requested_direction(&self) -> Direction {
        self.requested
    }

    /// Snapshot for the renderer
    pub fn view(&self) -> GameView {
        let segments = self
            .snake
            .occupied_cells()
            .into_iter()
            .enumerate()
            .map(|(index, cell)| Segment {
                cell,
                alpha: segment_alpha(index),
            })
            .collect();

        GameView {
            width: self.grid.width(),
            height: self.grid.height(),
            segments,
            food: self.food.position(),
            score: self.score,
            status: self.status,
        }
    }
}
