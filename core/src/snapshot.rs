use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer may show for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell {
                is_revealed: true,
                is_mine: true,
                ..
            } => Self::Mine,
            Cell {
                is_revealed: true,
                adjacent_mines,
                ..
            } => Self::Revealed(adjacent_mines),
            Cell {
                is_flagged: true, ..
            } => Self::Flagged,
            _ => Self::Hidden,
        }
    }
}

/// Owned, read-only copy of a board for presentation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub mine_count: CellCount,
    pub flags_placed: CellCount,
    pub remaining_mines: CellCount,
    pub cells: Array2<Cell>,
}

impl Snapshot {
    pub fn from_board(board: &Board) -> Self {
        Self {
            size: board.size(),
            mine_count: board.mine_count(),
            flags_placed: board.flags_placed(),
            remaining_mines: board.remaining_mines(),
            cells: board.cells().clone(),
        }
    }

    /// Player-visible state of every cell; hidden mines stay hidden.
    pub fn views(&self) -> Array2<CellView> {
        self.cells.map(|&cell| CellView::from(cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_hide_unrevealed_mines() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(0, 0), (1, 1)]).unwrap();
        let mut board = Board::with_layout(layout);

        board.reveal((0, 1)).unwrap();
        board.toggle_flag((1, 1)).unwrap();

        let views = board.snapshot().views();

        assert_eq!(views[(0, 0)], CellView::Hidden);
        assert_eq!(views[(0, 1)], CellView::Revealed(2));
        assert_eq!(views[(1, 0)], CellView::Hidden);
        assert_eq!(views[(1, 1)], CellView::Flagged);
    }

    #[test]
    fn snapshot_carries_counters() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();
        let mut board = Board::with_layout(layout);

        board.toggle_flag((0, 0)).unwrap();
        let snapshot = board.snapshot();

        assert_eq!(snapshot.size, (3, 3));
        assert_eq!(snapshot.mine_count, 2);
        assert_eq!(snapshot.flags_placed, 1);
        assert_eq!(snapshot.remaining_mines, 1);
    }

    #[test]
    fn exposed_mines_show_after_loss() {
        let layout = MineLayout::from_mine_coords((1, 2), &[(0, 0)]).unwrap();
        let mut board = Board::with_layout(layout);

        board.reveal_mines();

        assert_eq!(board.snapshot().views()[(0, 0)], CellView::Mine);
    }
}
