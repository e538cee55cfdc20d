use alloc::rc::Rc;

use crate::key::KeyMap;
use crate::{Descriptor, Error, Result, ViewKind};

#[derive(Debug)]
struct KindEntry {
    exemplar: Rc<Descriptor>,
    live: usize,
}

/// Maps each concrete item kind to its [`ViewKind`] and retains one exemplar descriptor per kind.
///
/// The exemplar is only ever used to manufacture fresh holders; it is never bound with data.
/// Entries are created lazily on first sight.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    kinds: KeyMap<ViewKind, KindEntry>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the descriptor's kind. Idempotent: later descriptors of a known kind do not
    /// replace the exemplar.
    pub fn register(&mut self, descriptor: &Rc<Descriptor>) -> ViewKind {
        let kind = descriptor.view_kind();
        self.kinds.entry(kind).or_insert_with(|| {
            rtrace!(kind = kind.get(), name = descriptor.kind_name(), "register kind");
            KindEntry {
                exemplar: Rc::clone(descriptor),
                live: 0,
            }
        });
        kind
    }

    /// Registers the descriptor's kind and counts one more live item of it.
    pub(crate) fn retain(&mut self, descriptor: &Rc<Descriptor>) {
        let kind = self.register(descriptor);
        if let Some(entry) = self.kinds.get_mut(&kind) {
            entry.live += 1;
        }
    }

    /// Counts one live item less; returns the remaining live count.
    pub(crate) fn release(&mut self, kind: ViewKind) -> usize {
        let Some(entry) = self.kinds.get_mut(&kind) else {
            return 0;
        };
        debug_assert!(entry.live > 0, "release of a kind with no live items");
        entry.live = entry.live.saturating_sub(1);
        entry.live
    }

    /// Returns the retained exemplar for a kind.
    pub fn resolve_exemplar(&self, kind: ViewKind) -> Result<&Rc<Descriptor>> {
        self.kinds
            .get(&kind)
            .map(|entry| &entry.exemplar)
            .ok_or(Error::UnknownViewKind(kind))
    }

    pub fn kind_name(&self, kind: ViewKind) -> Option<&'static str> {
        self.kinds.get(&kind).map(|entry| entry.exemplar.kind_name())
    }

    /// Number of live list items of this kind.
    pub fn live_count(&self, kind: ViewKind) -> usize {
        self.kinds.get(&kind).map_or(0, |entry| entry.live)
    }

    /// Drops a kind's entry. Returns whether it existed.
    ///
    /// Pruning a kind that still has live items makes holder creation for them fail with
    /// [`Error::UnknownViewKind`].
    pub fn prune(&mut self, kind: ViewKind) -> bool {
        let removed = self.kinds.remove(&kind);
        if let Some(entry) = &removed {
            if entry.live > 0 {
                rwarn!(
                    kind = kind.get(),
                    live = entry.live,
                    "pruned a view kind that still has live items"
                );
            }
            rtrace!(kind = kind.get(), "prune kind");
        }
        removed.is_some()
    }

    pub fn contains(&self, kind: ViewKind) -> bool {
        self.kinds.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Registered kinds, in unspecified order.
    pub fn kinds(&self) -> impl Iterator<Item = ViewKind> + '_ {
        self.kinds.keys().copied()
    }
}
