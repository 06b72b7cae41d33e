//! Terminal drawing of a [`GameView`](crate::game::GameView)

pub mod palette;
pub mod renderer;

pub use palette::{Palette, Rgb};
pub use renderer::Renderer;
