use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::Descriptor;
use crate::key::KeyMap;

/// Toggle policy of a selection group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupPolicy {
    /// `false` (the default) makes the group mutually exclusive.
    pub multi_select: bool,
}

/// Observer of a selection group: receives the group name and every selected member, in
/// canonical order.
pub type SelectionListener = Box<dyn FnMut(&str, &[Rc<Descriptor>])>;

/// A reported selection change, also handed back to the caller of `activate`/`select` so it can
/// react with further list mutations (e.g. swapping a detail group).
#[derive(Clone, Debug)]
pub struct SelectionEvent {
    pub group: String,
    pub selected: Vec<Rc<Descriptor>>,
}

pub(crate) struct Activation {
    pub(crate) group: String,
    /// Every descriptor whose flag flipped, target first.
    pub(crate) flipped: Vec<Rc<Descriptor>>,
    /// Whether the change is a selection worth reporting to the group's observer.
    pub(crate) report: bool,
}

#[derive(Default)]
pub(crate) struct SelectionGroups {
    policies: KeyMap<String, GroupPolicy>,
    listeners: KeyMap<String, SelectionListener>,
}

impl SelectionGroups {
    pub(crate) fn set_policy(&mut self, group: &str, multi_select: bool) {
        self.policies
            .insert(String::from(group), GroupPolicy { multi_select });
    }

    pub(crate) fn policy(&self, group: &str) -> GroupPolicy {
        self.policies.get(group).copied().unwrap_or_default()
    }

    pub(crate) fn set_listener(&mut self, group: &str, listener: SelectionListener) {
        self.listeners.insert(String::from(group), listener);
    }

    pub(crate) fn remove_listener(&mut self, group: &str) -> bool {
        self.listeners.remove(group).is_some()
    }

    pub(crate) fn has_listener(&self, group: &str) -> bool {
        self.listeners.contains_key(group)
    }

    /// Applies the group policy for an activation of `target`.
    ///
    /// Single-select clears every other member over the whole canonical list, whatever the
    /// current filter shows.
    pub(crate) fn activate(
        &self,
        canonical: &[Rc<Descriptor>],
        target: &Rc<Descriptor>,
    ) -> Option<Activation> {
        let group = target.selection_group()?;
        let mut flipped = Vec::new();

        let report = if self.policy(group).multi_select {
            target.set_selected(!target.is_selected());
            flipped.push(Rc::clone(target));
            true
        } else {
            let was_selected = target.is_selected();
            if target.set_selected(true) {
                flipped.push(Rc::clone(target));
            }
            for other in canonical {
                if Rc::ptr_eq(other, target) || other.selection_group() != Some(group) {
                    continue;
                }
                if other.set_selected(false) {
                    flipped.push(Rc::clone(other));
                }
            }
            !was_selected
        };

        Some(Activation {
            group: String::from(group),
            flipped,
            report,
        })
    }

    pub(crate) fn notify(&mut self, group: &str, selected: &[Rc<Descriptor>]) {
        if let Some(listener) = self.listeners.get_mut(group) {
            listener(group, selected);
        }
    }
}

impl core::fmt::Debug for SelectionGroups {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectionGroups")
            .field("policies", &self.policies)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Selected members of `group`, in canonical order.
pub(crate) fn selected_in(canonical: &[Rc<Descriptor>], group: &str) -> Vec<Rc<Descriptor>> {
    canonical
        .iter()
        .filter(|d| d.is_selected() && d.selection_group() == Some(group))
        .cloned()
        .collect()
}

/// Canonical indices of every member of `group`, ascending.
pub(crate) fn member_indices(canonical: &[Rc<Descriptor>], group: &str) -> Vec<usize> {
    canonical
        .iter()
        .enumerate()
        .filter(|(_, d)| d.selection_group() == Some(group))
        .map(|(i, _)| i)
        .collect()
}
