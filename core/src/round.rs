use serde::{Deserialize, Serialize};

use crate::*;

/// Timer value reported for clears slower than this.
pub const MAX_ELAPSED_SECONDS: u32 = 999;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl RoundState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Notification for the host when a round ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    Won {
        difficulty: Difficulty,
        elapsed_seconds: u32,
    },
    Lost,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoundUpdate<T> {
    pub outcome: T,
    pub event: Option<RoundEvent>,
}

/// Controller for one round at a time: forwards player intents to the board, tracks the round state and
/// reports results to the injected progression store.
#[derive(Debug)]
pub struct Round<S> {
    board: Board,
    config: GameConfig,
    difficulty: Difficulty,
    width: Coord,
    extra_space: bool,
    state: RoundState,
    store: S,
}

impl<S: ProgressionStore> Round<S> {
    pub fn new(
        difficulty: Difficulty,
        width: Coord,
        extra_space: bool,
        seed: u64,
        store: S,
    ) -> Result<Self> {
        let config = difficulty.config(width, extra_space)?;
        Ok(Self {
            board: Board::new(config, seed),
            config,
            difficulty,
            width,
            extra_space,
            state: RoundState::Ready,
            store,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Discards the board and starts over with the same difficulty.
    pub fn reset(&mut self, seed: u64) {
        self.board = Board::new(self.config, seed);
        self.state = RoundState::Ready;
    }

    /// Switches preset and starts a fresh round. On a config error the current round is left untouched.
    pub fn set_difficulty(&mut self, difficulty: Difficulty, seed: u64) -> Result<()> {
        self.config = difficulty.config(self.width, self.extra_space)?;
        self.difficulty = difficulty;
        self.reset(seed);
        Ok(())
    }

    pub fn reveal(
        &mut self,
        coords: Coord2,
        elapsed_seconds: u32,
    ) -> Result<RoundUpdate<RevealOutcome>> {
        self.check_not_finished()?;
        let outcome = self.board.reveal(coords)?;

        let event = if outcome.hit_mine() {
            Some(self.lose(coords))
        } else if outcome.won {
            Some(self.win(elapsed_seconds))
        } else {
            if outcome.has_update() || outcome.placed_mines {
                self.mark_started();
            }
            None
        };

        Ok(RoundUpdate { outcome, event })
    }

    pub fn toggle_flag(
        &mut self,
        coords: Coord2,
        elapsed_seconds: u32,
    ) -> Result<RoundUpdate<MarkOutcome>> {
        self.check_not_finished()?;
        let outcome = self.board.toggle_flag(coords)?;

        let event = if !outcome.has_update() {
            None
        } else if self.board.check_win() {
            Some(self.win(elapsed_seconds))
        } else {
            self.mark_started();
            None
        };

        Ok(RoundUpdate { outcome, event })
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = RoundState::Active;
        }
    }

    fn win(&mut self, elapsed_seconds: u32) -> RoundEvent {
        let elapsed_seconds = elapsed_seconds.min(MAX_ELAPSED_SECONDS);
        let difficulty = self.difficulty;
        self.state = RoundState::Won;

        self.store.record(StatKey::ClearCount(difficulty), 1);
        let best = self
            .store
            .record(StatKey::BestClearTime(difficulty), elapsed_seconds.into());
        self.store
            .record(StatKey::TotalMinesFound, self.board.mine_count().into());
        self.store.record(StatKey::Points, difficulty.reward_points());

        log::info!(
            "Cleared {} board in {}s (best {}s)",
            difficulty.name(),
            elapsed_seconds,
            best
        );
        RoundEvent::Won {
            difficulty,
            elapsed_seconds,
        }
    }

    fn lose(&mut self, coords: Coord2) -> RoundEvent {
        self.state = RoundState::Lost;
        self.board.reveal_mines();
        log::info!("Hit mine at {:?} on {} board", coords, self.difficulty.name());
        RoundEvent::Lost
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
