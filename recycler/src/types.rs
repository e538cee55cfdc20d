/// Outcome of `RecyclerList::add_or_update`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Update {
    /// No live item shared the id; the item was appended at this index.
    Inserted(usize),
    /// The live item asked to be replaced; the new item took its index.
    Replaced(usize),
    /// The live item declined replacement and was kept.
    Unchanged(usize),
}

impl Update {
    pub fn index(&self) -> usize {
        match *self {
            Self::Inserted(i) | Self::Replaced(i) | Self::Unchanged(i) => i,
        }
    }
}

/// Counts of the operations a `RecyclerList::sync` performed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncSummary {
    pub inserted: usize,
    pub removed: usize,
    pub moved: usize,
    pub replaced: usize,
}

impl SyncSummary {
    /// Whether the sync changed row count or order.
    pub fn is_structural(&self) -> bool {
        self.inserted > 0 || self.removed > 0 || self.moved > 0
    }

    pub fn is_noop(&self) -> bool {
        !self.is_structural() && self.replaced == 0
    }
}
