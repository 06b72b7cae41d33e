//! Torus Snake - Snake on a wrap-around grid
//!
//! This library provides:
//! - Core game logic: snake, food, the game state machine and its tick timing (game module)
//! - TUI rendering of a game snapshot (render module)
//! - Keyboard mapping (input module)
//! - Session statistics (metrics module)
//! - The interactive terminal loop (modes module)
//! - Settings file and log setup (config, logging modules)

pub mod config;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
