//! Read-only snapshot of a game, handed to renderers

use super::grid::Cell;

/// Opacity of the head segment
pub const HEAD_ALPHA: u8 = 255;
/// Segments never fade below this opacity
pub const MIN_ALPHA: u8 = 40;
/// Opacity lost per segment from head to tail
pub const FADE_STEP: u8 = 5;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The snake filled the board
    Won,
    /// The snake ran into itself
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Ended(Outcome),
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::Running => None,
            GameStatus::Ended(outcome) => Some(*outcome),
        }
    }
}

/// One snake cell and its opacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub cell: Cell,
    pub alpha: u8,
}

/// Opacity of the segment at `index` (0 is the head)
pub fn segment_alpha(index: usize) -> u8 {
    let faded = HEAD_ALPHA as usize
        - (index.saturating_mul(FADE_STEP as usize)).min(HEAD_ALPHA as usize);
    faded.max(MIN_ALPHA as usize) as u8
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    pub width: i32,
    pub height: i32,
    /// Head first
    pub segments: Vec<Segment>,
    pub food: Option<Cell>,
    pub score: u32,
    pub status: GameStatus,
}

impl GameView {
    /// Segment opacity per cell in row-major order, built in one pass.
    /// Where segments overlap, the one nearest the head wins.
    pub fn alpha_grid(&self) -> Vec<Option<u8>> {
        let mut grid = vec![None; (self.width * self.height) as usize];

        for segment in self.segments.iter().rev() {
            let Cell { x, y } = segment.cell;
            grid[(y * self.width + x) as usize] = Some(segment.alpha);
        }

        grid
    }

    pub fn head(&self) -> Option<Cell> {
        self.segments.first().map(|s| s.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_fade() {
        assert_eq!(segment_alpha(0), 255);
        assert_eq!(segment_alpha(1), 250);
        assert_eq!(segment_alpha(10), 205);
        assert_eq!(segment_alpha(43), 40);
        assert_eq!(segment_alpha(44), 40);
        assert_eq!(segment_alpha(10_000), 40);
    }

    #[test]
    fn test_alpha_grid() {
        let view = GameView {
            width: 3,
            height: 2,
            segments: vec![
                Segment { cell: Cell::new(2, 1), alpha: 255 },
                Segment { cell: Cell::new(1, 1), alpha: 250 },
                Segment { cell: Cell::new(2, 1), alpha: 245 },
                Segment { cell: Cell::new(0, 0), alpha: 240 },
            ],
            food: None,
            score: 0,
            status: GameStatus::Running,
        };

        assert_eq!(
            view.alpha_grid(),
            vec![Some(240), None, None, None, Some(250), Some(255)]
        );
    }

    #[test]
    fn test_status_outcome() {
        assert!(GameStatus::Running.is_running());
        assert_eq!(GameStatus::Running.outcome(), None);
        assert_eq!(
            GameStatus::Ended(Outcome::Won).outcome(),
            Some(Outcome::Won)
        );
        assert!(!GameStatus::Ended(Outcome::Lost).is_running());
    }
}
