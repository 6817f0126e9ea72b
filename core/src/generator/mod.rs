use crate::*;
pub use safe_start::*;

mod safe_start;

/// Radius of the mine-free square kept around the first revealed cell.
pub const SAFE_RADIUS: Coord = 2;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}

/// Generator that always hands back the same layout, for replays and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedLayout(pub MineLayout);

impl MinefieldGenerator for FixedLayout {
    fn generate(self, _config: GameConfig) -> MineLayout {
        self.0
    }
}
