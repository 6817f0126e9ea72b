use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::*;

/// How a newly reported value combines with the stored one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergePolicy {
    /// Add the reported value.
    Sum,
    /// Add one, ignoring the reported value.
    Increment,
    /// Keep the smaller of the two. Zero counts as "no record yet".
    KeepMin,
}

impl MergePolicy {
    pub fn merge(self, current: Option<u64>, value: u64) -> u64 {
        use MergePolicy::*;
        match (self, current) {
            (Sum, current) => current.unwrap_or(0).saturating_add(value),
            (Increment, current) => current.unwrap_or(0).saturating_add(1),
            (KeepMin, None | Some(0)) => value,
            (KeepMin, Some(current)) => current.min(value),
        }
    }
}

/// Typed key of a persisted statistic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKey {
    ClearCount(Difficulty),
    /// Fastest clear in seconds.
    BestClearTime(Difficulty),
    TotalMinesFound,
    /// Spendable currency balance.
    Points,
}

impl StatKey {
    pub const ALL: [Self; 8] = [
        Self::ClearCount(Difficulty::Easy),
        Self::ClearCount(Difficulty::Normal),
        Self::ClearCount(Difficulty::Hard),
        Self::BestClearTime(Difficulty::Easy),
        Self::BestClearTime(Difficulty::Normal),
        Self::BestClearTime(Difficulty::Hard),
        Self::TotalMinesFound,
        Self::Points,
    ];

    /// Stable identifier for the backing key-value store.
    pub const fn id(self) -> &'static str {
        use Difficulty::*;
        match self {
            Self::ClearCount(Easy) => "clearCountsEasy",
            Self::ClearCount(Normal) => "clearCountsNormal",
            Self::ClearCount(Hard) => "clearCountsHard",
            Self::BestClearTime(Easy) => "easyBestClearTime",
            Self::BestClearTime(Normal) => "normalBestClearTime",
            Self::BestClearTime(Hard) => "hardBestClearTime",
            Self::TotalMinesFound => "totalMinesFound",
            Self::Points => "userPoints",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.id() == id)
    }

    pub const fn policy(self) -> MergePolicy {
        match self {
            Self::ClearCount(_) => MergePolicy::Increment,
            Self::BestClearTime(_) => MergePolicy::KeepMin,
            Self::TotalMinesFound | Self::Points => MergePolicy::Sum,
        }
    }
}

/// Persistent statistics and currency, owned by the host.
///
/// Implementors only provide raw access; [`ProgressionStore::record`] applies the key's merge policy.
pub trait ProgressionStore {
    fn get(&self, key: StatKey) -> Option<u64>;

    fn put(&mut self, key: StatKey, value: u64);

    fn record(&mut self, key: StatKey, value: u64) -> u64 {
        let current = self.get(key);
        let merged = key.policy().merge(current, value);
        log::trace!(
            "Recording {} = {} ({:?} of {:?} and {})",
            key.id(),
            merged,
            key.policy(),
            current,
            value
        );
        self.put(key, merged);
        merged
    }
}

impl<S: ProgressionStore + ?Sized> ProgressionStore for &mut S {
    fn get(&self, key: StatKey) -> Option<u64> {
        (**self).get(key)
    }

    fn put(&mut self, key: StatKey, value: u64) {
        (**self).put(key, value)
    }
}

/// In-memory store for tests and hosts that do not persist progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<StatKey, u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKey, u64)> + '_ {
        self.values.iter().map(|(&key, &value)| (key, value))
    }
}

impl ProgressionStore for MemoryStore {
    fn get(&self, key: StatKey) -> Option<u64> {
        self.values.get(&key).copied()
    }

    fn put(&mut self, key: StatKey, value: u64) {
        self.values.insert(key, value);
    }
}
