use core::ops::RangeInclusive;

use ndarray::Array2;

/// Single coordinate axis used for board rows, columns and their extents.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Chebyshev distance between two positions, the metric of the safe-start square.
pub const fn chebyshev(a: Coord2, b: Coord2) -> Coord {
    let d_row = a.0.abs_diff(b.0);
    let d_col = a.1.abs_diff(b.1);
    if d_row > d_col { d_row } else { d_col }
}

/// Indices within `radius` of `center` on an axis of `extent` cells. `center` must be in bounds.
pub fn clipped_span(center: Coord, radius: Coord, extent: Coord) -> RangeInclusive<Coord> {
    let high = center.saturating_add(radius).min(extent.saturating_sub(1));
    center.saturating_sub(radius)..=high
}

pub trait GridNeighbors {
    fn neighbors(&self, center: Coord2) -> NeighborIter;
}

impl<T> GridNeighbors for Array2<T> {
    fn neighbors(&self, center: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        // dimensions always originate from a `Coord2`
        NeighborIter::new(center, (rows as Coord, cols as Coord))
    }
}

/// Moore neighborhood of a cell, clipped to the board, in row-major order.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    cols: RangeInclusive<Coord>,
    last_row: Coord,
    cursor: Option<Coord2>,
}

impl NeighborIter {
    /// Neighbors of `center` on a board of `bounds` rows and columns. Empty if `center` is off the board.
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let (row, col) = center;
        let (rows, cols) = bounds;
        let row_span = clipped_span(row, 1, rows);
        let col_span = clipped_span(col, 1, cols);
        let cursor = (row < rows && col < cols).then_some((*row_span.start(), *col_span.start()));

        Self {
            center,
            last_row: *row_span.end(),
            cols: col_span,
            cursor,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (row, col) = self.cursor?;
            self.cursor = if col < *self.cols.end() {
                Some((row, col + 1))
            } else if row < self.last_row {
                Some((row + 1, *self.cols.start()))
            } else {
                None
            };

            if (row, col) != self.center {
                return Some((row, col));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (3, 3)).collect();
        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        assert_eq!(NeighborIter::new((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn off_board_center_has_no_neighbors() {
        assert_eq!(NeighborIter::new((3, 0), (3, 3)).count(), 0);
    }

    #[test]
    fn bottom_edge_visits_row_major() {
        let neighbors: Vec<_> = NeighborIter::new((2, 1), (3, 4)).collect();
        assert_eq!(neighbors, [(1, 0), (1, 1), (1, 2), (2, 0), (2, 2)]);
    }

    #[test]
    fn span_is_clipped_to_axis() {
        assert_eq!(clipped_span(0, 2, 8), 0..=2);
        assert_eq!(clipped_span(4, 2, 8), 2..=6);
        assert_eq!(clipped_span(7, 2, 8), 5..=7);
        assert_eq!(clipped_span(0, 2, 1), 0..=0);
    }

    #[test]
    fn chebyshev_is_max_of_axis_distances() {
        assert_eq!(chebyshev((0, 0), (2, 1)), 2);
        assert_eq!(chebyshev((5, 3), (3, 7)), 4);
        assert_eq!(chebyshev((4, 4), (4, 4)), 0);
    }
}
