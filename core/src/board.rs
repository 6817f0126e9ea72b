use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Grid state of a single round.
///
/// Mines are laid out lazily by the first [`Board::reveal`], seeded with the board's seed and kept away
/// from the revealed cell. After that only reveal and flag state changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    cells: Array2<Cell>,
    flags_placed: CellCount,
    revealed_count: CellCount,
    mines_placed: bool,
    seed: u64,
}

impl Board {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            cells: Array2::default(config.size().to_nd_index()),
            flags_placed: 0,
            revealed_count: 0,
            mines_placed: false,
            seed,
        }
    }

    /// Board with a predetermined layout; the first reveal does not move any mine.
    pub fn with_layout(layout: MineLayout) -> Self {
        let mut board = Self::new(layout.game_config(), 0);
        board.install(&layout);
        board
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn flags_placed(&self) -> CellCount {
        self.flags_placed
    }

    /// Mines not yet accounted for by a flag, floored at zero.
    pub fn remaining_mines(&self) -> CellCount {
        self.config.mines().saturating_sub(self.flags_placed)
    }

    /// Number of safe cells currently open.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn cell(&self, coords: Coord2) -> core::result::Result<Cell, IndexError> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn validate_coords(&self, coords: Coord2) -> core::result::Result<Coord2, IndexError> {
        let (rows, cols) = self.config.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(IndexError::OutOfBounds)
        }
    }

    /// Lays out mines from `generator` unless they are already placed. Returns whether placement happened.
    pub fn place_mines_with<G: MinefieldGenerator>(
        &mut self,
        generator: G,
    ) -> core::result::Result<bool, ConfigError> {
        if self.mines_placed {
            return Ok(false);
        }

        let layout = generator.generate(self.config);
        if layout.size() != self.config.size() {
            return Err(ConfigError::InvalidSize);
        }
        if layout.mine_count() >= self.config.total_cells() {
            return Err(ConfigError::InvalidMineCount);
        }

        self.install(&layout);
        Ok(true)
    }

    pub fn reveal(&mut self, coords: Coord2) -> core::result::Result<RevealOutcome, IndexError> {
        let coords = self.validate_coords(coords)?;

        let placed_mines = !self.mines_placed;
        if placed_mines {
            let layout = SafeStartGenerator::new(self.seed, coords).generate(self.config);
            self.install(&layout);
        }

        let cell = self.cells[coords.to_nd_index()];
        if cell.is_revealed || cell.is_flagged {
            return Ok(RevealOutcome {
                status: RevealStatus::Ignored,
                placed_mines,
                won: self.check_win(),
            });
        }

        self.cells[coords.to_nd_index()].is_revealed = true;
        let status = if cell.is_mine {
            RevealStatus::HitMine
        } else {
            self.revealed_count += 1;
            if cell.adjacent_mines == 0 {
                self.cascade(coords);
            }
            RevealStatus::Revealed
        };

        Ok(RevealOutcome {
            status,
            placed_mines,
            won: self.check_win(),
        })
    }

    pub fn toggle_flag(
        &mut self,
        coords: Coord2,
    ) -> core::result::Result<MarkOutcome, IndexError> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];

        Ok(match (cell.is_revealed, cell.is_flagged) {
            (true, _) => MarkOutcome::NoChange,
            (false, false) => {
                cell.is_flagged = true;
                self.flags_placed += 1;
                MarkOutcome::Flagged
            }
            (false, true) => {
                cell.is_flagged = false;
                self.flags_placed -= 1;
                MarkOutcome::Unflagged
            }
        })
    }

    /// Every mine flagged and every safe cell open. Flags on safe cells do not matter.
    pub fn check_win(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_resolved())
    }

    /// Opens every mine for the end-of-round display. Flags and counters are left alone.
    pub fn reveal_mines(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_mine) {
            cell.is_revealed = true;
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_board(self)
    }

    fn install(&mut self, layout: &MineLayout) {
        for ((row, col), cell) in self.cells.indexed_iter_mut() {
            cell.is_mine = layout.contains_mine((row as Coord, col as Coord));
        }
        self.config = layout.game_config();
        self.mines_placed = true;
        self.compute_adjacency();
    }

    fn compute_adjacency(&mut self) {
        let (rows, cols) = self.config.size();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                let adjacent_mines = if self.cells[coords.to_nd_index()].is_mine {
                    0
                } else {
                    self.cells
                        .neighbors(coords)
                        .filter(|&pos| self.cells[pos.to_nd_index()].is_mine)
                        .count() as u8
                };
                self.cells[coords.to_nd_index()].adjacent_mines = adjacent_mines;
            }
        }
    }

    /// Opens the zero region connected to `start` plus its numbered border.
    ///
    /// A cell is enqueued only on its hidden-to-revealed transition, so each cell is expanded at most
    /// once. Flags caught in the cascade are removed.
    fn cascade(&mut self, start: Coord2) {
        let mut opened: CellCount = 0;
        let mut to_visit = VecDeque::from([start]);

        while let Some(visit_coords) = to_visit.pop_front() {
            for pos in self.cells.neighbors(visit_coords) {
                let cell = &mut self.cells[pos.to_nd_index()];
                if cell.is_revealed || cell.is_mine {
                    continue;
                }

                cell.is_revealed = true;
                if cell.is_flagged {
                    cell.is_flagged = false;
                    self.flags_placed -= 1;
                }
                self.revealed_count += 1;
                opened += 1;

                if cell.adjacent_mines == 0 {
                    to_visit.push_back(pos);
                }
            }
        }

        log::debug!("Cascade from {:?} opened {} cells", start, opened);
    }
}
