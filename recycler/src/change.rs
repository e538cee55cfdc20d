/// A change notification for the hosting view-list surface.
///
/// Applied in emission order, the events transform the host's prior rows into the list's current
/// active view (the filtered projection when a filter is active, the canonical list otherwise).
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Change {
    /// `count` rows were inserted starting at `start`.
    InsertRange { start: usize, count: usize },
    /// `count` rows were removed starting at `start`.
    RemoveRange { start: usize, count: usize },
    /// The row at `from` was removed and reinserted so that it now sits at `to`.
    Move { from: usize, to: usize },
    /// The row at this index must be rebound.
    ChangeAt(usize),
    /// Everything may have changed; the host should re-read size and rows.
    FullRefresh,
}

impl Change {
    /// Whether the event changes row count or order.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::InsertRange { .. } | Self::RemoveRange { .. } | Self::Move { .. }
        )
    }
}
