use serde::{Deserialize, Serialize};

use crate::*;

/// Column count used when the caller has no layout preference.
pub const DEFAULT_WIDTH: Coord = 8;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Normal, Self::Hard];

    /// `(height, mines)` for this preset.
    ///
    /// `extra_space` is the host's hint that a taller grid fits on screen; only `Hard` uses it.
    pub const fn grid_settings(self, extra_space: bool) -> (Coord, CellCount) {
        match self {
            Self::Easy => (8, 8),
            Self::Normal => (11, 12),
            Self::Hard if extra_space => (15, 23),
            Self::Hard => (12, 19),
        }
    }

    pub fn config(
        self,
        width: Coord,
        extra_space: bool,
    ) -> core::result::Result<GameConfig, ConfigError> {
        let (height, mines) = self.grid_settings(extra_space);
        GameConfig::new((height, width), mines)
    }

    /// Currency granted for clearing a board of this difficulty.
    pub const fn reward_points(self) -> u64 {
        match self {
            Self::Easy => 10,
            Self::Normal => 20,
            Self::Hard => 40,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_depends_on_extra_space() {
        assert_eq!(Difficulty::Hard.grid_settings(true), (15, 23));
        assert_eq!(Difficulty::Hard.grid_settings(false), (12, 19));
        assert_eq!(
            Difficulty::Easy.grid_settings(true),
            Difficulty::Easy.grid_settings(false)
        );
    }

    #[test]
    fn presets_fit_default_width() {
        for difficulty in Difficulty::ALL {
            for extra_space in [false, true] {
                let config = difficulty.config(DEFAULT_WIDTH, extra_space).unwrap();
                assert_eq!(config.width(), DEFAULT_WIDTH);
                assert!(config.mines() < config.total_cells());
            }
        }
    }

    #[test]
    fn narrow_width_can_reject_preset() {
        assert_eq!(
            Difficulty::Easy.config(1, false),
            Err(ConfigError::InvalidMineCount)
        );
    }

    #[test]
    fn rewards_grow_with_difficulty() {
        assert!(Difficulty::Easy.reward_points() < Difficulty::Normal.reward_points());
        assert!(Difficulty::Normal.reward_points() < Difficulty::Hard.reward_points());
    }
}
