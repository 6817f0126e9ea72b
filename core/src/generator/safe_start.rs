use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Rejection-sampling generator that keeps a Chebyshev square around the start cell free of mines.
///
/// When the board is too dense for the full square, the radius shrinks one step at a time until the
/// remaining cells can hold every mine. Radius zero only protects the start cell itself, which is always
/// possible on a valid config, so generation never loops forever.
#[derive(Clone, Debug, PartialEq)]
pub struct SafeStartGenerator {
    seed: u64,
    start: Coord2,
    radius: Coord,
}

impl SafeStartGenerator {
    pub fn new(seed: u64, start: Coord2) -> Self {
        Self::with_radius(seed, start, SAFE_RADIUS)
    }

    pub fn with_radius(seed: u64, start: Coord2, radius: Coord) -> Self {
        Self {
            seed,
            start,
            radius,
        }
    }

    /// Largest radius not above the requested one that still leaves room for all mines.
    fn effective_radius(&self, config: GameConfig) -> Option<Coord> {
        let (rows, cols) = config.size();
        if self.start.0 >= rows || self.start.1 >= cols {
            log::warn!(
                "Start cell {:?} is outside the {}x{} board, no cell is kept safe",
                self.start,
                rows,
                cols
            );
            return None;
        }

        // radius 0 always fits since a valid config keeps one cell free
        let total_cells = config.total_cells();
        let mut radius = self.radius;
        while radius > 0
            && total_cells - excluded_cells(config.size(), self.start, radius) < config.mines()
        {
            log::warn!(
                "Cannot keep radius {} around start clear, fallback to radius {}",
                radius,
                radius - 1
            );
            radius -= 1;
        }
        Some(radius)
    }
}

/// Number of cells covered by the square of `radius` around `center`, clipped to the board.
fn excluded_cells(size: Coord2, center: Coord2, radius: Coord) -> CellCount {
    let span_len = |center: Coord, extent: Coord| -> CellCount {
        let span = clipped_span(center, radius, extent);
        CellCount::from(span.end() - span.start()) + 1
    };
    span_len(center.0, size.0) * span_len(center.1, size.1)
}

impl MinefieldGenerator for SafeStartGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        let radius = self.effective_radius(config);
        let (rows, cols) = config.size();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed: CellCount = 0;
        let mut draws: u32 = 0;

        while mines_placed < config.mines() {
            let candidate = (rng.random_range(0..rows), rng.random_range(0..cols));
            draws += 1;

            if radius.is_some_and(|radius| chebyshev(candidate, self.start) <= radius) {
                continue;
            }

            let cell = &mut mine_mask[candidate.to_nd_index()];
            if *cell {
                continue;
            }
            *cell = true;
            mines_placed += 1;
        }

        log::debug!(
            "Placed {} mines on {}x{} board around {:?} (radius {:?}) in {} draws",
            mines_placed,
            rows,
            cols,
            self.start,
            radius,
            draws
        );
        MineLayout::from_parts(mine_mask, mines_placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rows: Coord, cols: Coord, mines: CellCount) -> GameConfig {
        GameConfig::new((rows, cols), mines).unwrap()
    }

    #[test]
    fn keeps_square_around_start_clear() {
        for seed in 0..64 {
            let layout = SafeStartGenerator::new(seed, (4, 4)).generate(config(9, 9, 40));

            assert_eq!(layout.mine_count(), 40);
            for row in 2..=6 {
                for col in 2..=6 {
                    assert!(!layout.contains_mine((row, col)), "seed {seed}: mine at {row},{col}");
                }
            }
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let a = SafeStartGenerator::new(7, (0, 0)).generate(config(10, 8, 15));
        let b = SafeStartGenerator::new(7, (0, 0)).generate(config(10, 8, 15));

        assert_eq!(a, b);
    }

    #[test]
    fn excluded_square_is_clipped_at_edges() {
        assert_eq!(excluded_cells((8, 8), (0, 0), 2), 9);
        assert_eq!(excluded_cells((8, 8), (4, 4), 2), 25);
        assert_eq!(excluded_cells((8, 8), (7, 4), 2), 15);
        assert_eq!(excluded_cells((1, 1), (0, 0), 2), 1);
    }

    #[test]
    fn dense_board_shrinks_radius() {
        // 4x4 leaves 16 - 9 = 7 cells at radius 1, not enough for 10 mines.
        let generator = SafeStartGenerator::new(3, (1, 1));
        assert_eq!(generator.effective_radius(config(4, 4, 10)), Some(0));

        let layout = generator.generate(config(4, 4, 10));
        assert_eq!(layout.mine_count(), 10);
        assert!(!layout.contains_mine((1, 1)));
    }

    #[test]
    fn densest_valid_board_only_spares_start() {
        let layout = SafeStartGenerator::new(11, (2, 1)).generate(config(3, 3, 8));

        assert_eq!(layout.mine_count(), 8);
        assert!(!layout.contains_mine((2, 1)));
    }

    #[test]
    fn start_outside_board_disables_exclusion() {
        let generator = SafeStartGenerator::new(0, (9, 9));
        assert_eq!(generator.effective_radius(config(3, 3, 2)), None);
    }
}
