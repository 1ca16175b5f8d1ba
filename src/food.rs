use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// Consumable item currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Places the next item on a uniformly random cell.
    ///
    /// Both axes are drawn independently. Occupied cells are not excluded,
    /// so the item can land on the snake's own body.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        Self::new(Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        })
    }
}
