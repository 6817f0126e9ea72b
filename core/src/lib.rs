#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use difficulty::*;
pub use error::*;
pub use generator::*;
pub use progression::*;
pub use round::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod difficulty;
mod error;
mod generator;
mod progression;
mod round;
mod snapshot;
mod types;

/// Dimensions and mine count of a board, validated on construction.
///
/// Every value, deserialized ones included, has non-empty dimensions and at least one safe cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    /// `(height, width)`, matching `(row, col)` coordinates.
    size: Coord2,
    mines: CellCount,
}

#[derive(Deserialize)]
struct RawGameConfig {
    size: Coord2,
    mines: CellCount,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> core::result::Result<Self, Self::Error> {
        Self::new(raw.size, raw.mines)
    }
}

impl GameConfig {
    pub fn new(size: Coord2, mines: CellCount) -> core::result::Result<Self, ConfigError> {
        if size.0 == 0 || size.1 == 0 {
            return Err(ConfigError::InvalidSize);
        }
        if mines >= mult(size.0, size.1) {
            return Err(ConfigError::InvalidMineCount);
        }
        Ok(Self { size, mines })
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn height(&self) -> Coord {
        self.size.0
    }

    pub const fn width(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub(crate) fn from_parts(mine_mask: Array2<bool>, mine_count: CellCount) -> Self {
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_coords(
        size: Coord2,
        mine_coords: &[Coord2],
    ) -> core::result::Result<Self, GameError> {
        let config = GameConfig::new(size, 0)?;
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(IndexError::OutOfBounds.into());
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        if mine_count >= config.total_cells() {
            return Err(ConfigError::InvalidMineCount.into());
        }

        Ok(Self::from_parts(mine_mask, mine_count))
    }

    pub fn game_config(&self) -> GameConfig {
        // a layout always leaves at least one safe cell
        GameConfig {
            size: self.size(),
            mines: self.mine_count,
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mine_mask
            .neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.mine_mask[(row as usize, col as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealStatus {
    /// Target was already open or flagged; nothing changed.
    Ignored,
    Revealed,
    HitMine,
}

/// Result of a single reveal call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RevealOutcome {
    pub status: RevealStatus,
    /// Mines were laid out by this call.
    pub placed_mines: bool,
    pub won: bool,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self.status, RevealStatus::Ignored)
    }

    pub const fn hit_mine(self) -> bool {
        matches!(self.status, RevealStatus::HitMine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_full_board() {
        assert_eq!(
            GameConfig::new((5, 5), 25),
            Err(ConfigError::InvalidMineCount)
        );
        assert_eq!(
            GameConfig::new((5, 5), 30),
            Err(ConfigError::InvalidMineCount)
        );
        assert!(GameConfig::new((5, 5), 24).is_ok());
    }

    #[test]
    fn config_rejects_empty_dimensions() {
        assert_eq!(GameConfig::new((0, 8), 0), Err(ConfigError::InvalidSize));
        assert_eq!(GameConfig::new((8, 0), 0), Err(ConfigError::InvalidSize));
    }

    #[test]
    fn layout_counts_adjacent_mines() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.adjacent_mine_count((1, 1)), 2);
        assert_eq!(layout.adjacent_mine_count((0, 2)), 0);
        assert_eq!(layout.adjacent_mine_count((0, 1)), 1);
    }

    #[test]
    fn layout_rejects_out_of_bounds_mine() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::Index(IndexError::OutOfBounds))
        );
    }

    #[test]
    fn layout_rejects_all_mine_board() {
        assert_eq!(
            MineLayout::from_mine_coords((1, 2), &[(0, 0), (0, 1)]),
            Err(GameError::Config(ConfigError::InvalidMineCount))
        );
    }
}
