use serde::{Deserialize, Serialize};

/// One board position as seen by the engine.
///
/// `adjacent_mines` is only meaningful for safe cells; it is left at zero on mines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub adjacent_mines: u8,
}

impl Cell {
    /// Whether a player action can still open this cell.
    pub const fn is_hidden(self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    /// Whether this cell satisfies its part of the win condition.
    pub const fn is_resolved(self) -> bool {
        if self.is_mine {
            self.is_flagged
        } else {
            self.is_revealed
        }
    }
}
