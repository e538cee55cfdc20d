use alloc::rc::Rc;

use crate::{Change, RecyclerList};

/// A callback fired for every change notification.
///
/// It runs after the change has been applied, so `list` already reflects it.
pub type OnChangeCallback = Rc<dyn Fn(&RecyclerList, Change)>;

/// Configuration for [`crate::RecyclerList`].
///
/// Cheap to clone: the callback is stored in an `Rc`.
#[derive(Clone, Default)]
pub struct ListOptions {
    /// Change sink for the hosting view-list surface.
    pub on_change: Option<OnChangeCallback>,

    /// Drop a view kind's registry entry (and its exemplar) as soon as no live item uses it.
    ///
    /// When off, a kind stays registered until `RecyclerList::remove_all_of_kind` drops it, so
    /// holders can still be created for rows of a stale filtered projection.
    pub prune_unused_kinds: bool,

    /// Initial capacity of the canonical list.
    pub initial_capacity: usize,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&RecyclerList, Change) + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Rc::new(f) as _);
        self
    }

    pub fn with_prune_unused_kinds(mut self, prune_unused_kinds: bool) -> Self {
        self.prune_unused_kinds = prune_unused_kinds;
        self
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}

impl core::fmt::Debug for ListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("on_change", &self.on_change.as_ref().map(|_| ".."))
            .field("prune_unused_kinds", &self.prune_unused_kinds)
            .field("initial_capacity", &self.initial_capacity)
            .finish_non_exhaustive()
    }
}
