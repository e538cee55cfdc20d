use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::Descriptor;

/// Which sequence the read path goes through.
///
/// The filtered projection is recomputed eagerly on every filter change and is never touched by
/// structural writes: a write while filtering leaves it stale until the next filter change.
#[derive(Clone, Debug, Default)]
pub(crate) enum Projection {
    #[default]
    Canonical,
    Filtered {
        term: String,
        items: Vec<Rc<Descriptor>>,
    },
}

impl Projection {
    /// A blank term disables filtering; any other term filters `canonical` by each item's own
    /// predicate, preserving canonical order.
    pub(crate) fn apply(canonical: &[Rc<Descriptor>], term: &str) -> Self {
        if term.trim().is_empty() {
            return Self::Canonical;
        }
        let items = canonical
            .iter()
            .filter(|d| d.item().on_filter(term))
            .cloned()
            .collect();
        Self::Filtered {
            term: String::from(term),
            items,
        }
    }

    pub(crate) fn is_filtered(&self) -> bool {
        matches!(self, Self::Filtered { .. })
    }

    pub(crate) fn term(&self) -> Option<&str> {
        match self {
            Self::Canonical => None,
            Self::Filtered { term, .. } => Some(term),
        }
    }

    pub(crate) fn active<'a>(&'a self, canonical: &'a [Rc<Descriptor>]) -> &'a [Rc<Descriptor>] {
        match self {
            Self::Canonical => canonical,
            Self::Filtered { items, .. } => items,
        }
    }

    pub(crate) fn active_mut<'a>(
        &'a mut self,
        canonical: &'a mut Vec<Rc<Descriptor>>,
    ) -> &'a mut Vec<Rc<Descriptor>> {
        match self {
            Self::Canonical => canonical,
            Self::Filtered { items, .. } => items,
        }
    }

    /// Index of this exact instance in the active view.
    pub(crate) fn position_of(
        &self,
        canonical: &[Rc<Descriptor>],
        descriptor: &Rc<Descriptor>,
    ) -> Option<usize> {
        self.active(canonical)
            .iter()
            .position(|d| Rc::ptr_eq(d, descriptor))
    }
}
