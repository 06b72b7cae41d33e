//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front end drives it through [`Game::update`] and draws [`GameView`].

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;
pub mod tick;
pub mod view;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{Game, StepInfo};
pub use food::Food;
pub use grid::{Cell, Grid, MAX_GRID_DIM};
pub use snake::Snake;
pub use tick::{TickClock, TickTimer};
pub use view::{GameStatus, GameView, Outcome, Segment};
