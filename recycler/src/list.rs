use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;
use core::cmp::Ordering;
use core::ops::Range;

use crate::diff::{first_duplicate, lis_mask, runs};
use crate::key::{KeyMap, KeySet};
use crate::projection::Projection;
use crate::selection::{SelectionGroups, member_indices, selected_in};
use crate::{
    Change, Descriptor, Error, GroupPolicy, IntoItem, Item, ListOptions, Result, SelectionEvent,
    SyncSummary, TypeRegistry, Update, ViewKind,
};

/// A headless, keyed list of heterogeneous item descriptors.
///
/// The list owns the canonical sequence, an optional filtered projection over it, the view-kind
/// registry and the selection groups. Every mutation reports what it did to the `on_change`
/// callback as a stream of [`Change`] events, which a host replays onto its rows.
///
/// Index conventions:
/// - reads ([`Self::len`], [`Self::get`], [`Self::activate`], ...) use active-view indices
/// - structural writes ([`Self::insert`], [`Self::remove_at`], [`Self::sync`], ...) use canonical
///   indices and only notify while no filter is active
pub struct RecyclerList {
    options: ListOptions,
    items: Vec<Rc<Descriptor>>,
    ids: KeySet<Box<str>>,
    view: Projection,
    registry: TypeRegistry,
    groups: SelectionGroups,
}

impl Default for RecyclerList {
    fn default() -> Self {
        Self::new(ListOptions::default())
    }
}

impl RecyclerList {
    pub fn new(options: ListOptions) -> Self {
        rdebug!(
            capacity = options.initial_capacity,
            prune_unused_kinds = options.prune_unused_kinds,
            "RecyclerList::new"
        );
        Self {
            items: Vec::with_capacity(options.initial_capacity),
            ids: KeySet::new(),
            view: Projection::Canonical,
            registry: TypeRegistry::new(),
            groups: SelectionGroups::default(),
            options,
        }
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&RecyclerList, Change) + 'static>) {
        self.options.on_change = on_change.map(|f| Rc::new(f) as _);
    }

    pub fn set_prune_unused_kinds(&mut self, prune_unused_kinds: bool) {
        self.options.prune_unused_kinds = prune_unused_kinds;
    }

    fn emit(&self, change: Change) {
        if let Some(cb) = &self.options.on_change {
            cb(self, change);
        }
    }

    /// Emits a canonical-indexed event. While filtering, the host shows the projection, whose
    /// indices these events do not describe.
    fn emit_canonical(&self, change: Change) {
        if self.view.is_filtered() {
            rtrace!(?change, "suppressed while filtered");
            return;
        }
        self.emit(change);
    }

    // --- reads ---

    /// Number of rows in the active view.
    pub fn len(&self) -> usize {
        self.active().len()
    }

    pub fn is_empty(&self) -> bool {
        self.active().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rc<Descriptor>> {
        self.active().get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<Descriptor>> + '_ {
        self.active().iter()
    }

    /// The active view: the filtered projection while a filter is active, the canonical list
    /// otherwise.
    pub fn active(&self) -> &[Rc<Descriptor>] {
        self.view.active(&self.items)
    }

    pub fn canonical(&self) -> &[Rc<Descriptor>] {
        &self.items
    }

    pub fn canonical_len(&self) -> usize {
        self.items.len()
    }

    /// Active-view index of the item with this diffing id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.active().iter().position(|d| d.diffing_id() == id)
    }

    pub fn canonical_position(&self, id: &str) -> Option<usize> {
        if !self.ids.contains(id) {
            return None;
        }
        self.items.iter().position(|d| d.diffing_id() == id)
    }

    /// Whether a live item (canonical, filtered or not) has this diffing id.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn view_kind_at(&self, index: usize) -> Result<ViewKind> {
        self.get(index)
            .map(|d| d.view_kind())
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// The retained exemplar for a kind; holder factories build fresh views from it.
    pub fn exemplar(&self, kind: ViewKind) -> Result<&Rc<Descriptor>> {
        self.registry.resolve_exemplar(kind)
    }

    pub fn is_filtered(&self) -> bool {
        self.view.is_filtered()
    }

    pub fn search_term(&self) -> Option<&str> {
        self.view.term()
    }

    // --- bookkeeping ---

    fn attach(&mut self, descriptor: Descriptor) -> Rc<Descriptor> {
        let descriptor = Rc::new(descriptor);
        self.ids.insert(Box::from(descriptor.diffing_id()));
        self.registry.retain(&descriptor);
        descriptor
    }

    fn detach(&mut self, descriptor: &Descriptor) {
        self.ids.remove(descriptor.diffing_id());
        self.release(descriptor.view_kind());
    }

    fn release(&mut self, kind: ViewKind) {
        if self.registry.release(kind) == 0 && self.options.prune_unused_kinds {
            self.registry.prune(kind);
        }
    }

    /// Swaps in a same-id descriptor at a canonical index.
    ///
    /// A descriptor of the same kind is reported as a rebind (`ChangeAt`). A different kind needs
    /// a fresh view, so the row is reported as removed and then inserted. Returns whether the row
    /// was rebound in place.
    fn replace_at(&mut self, index: usize, descriptor: Descriptor) -> bool {
        if self.items[index].view_kind() != descriptor.view_kind() {
            rtrace!(index, id = descriptor.diffing_id(), "kind changed, reinserting");
            let old = self.items.remove(index);
            self.detach(&old);
            self.emit_canonical(Change::RemoveRange {
                start: index,
                count: 1,
            });
            let descriptor = self.attach(descriptor);
            self.items.insert(index, descriptor);
            self.emit_canonical(Change::InsertRange {
                start: index,
                count: 1,
            });
            return false;
        }
        let descriptor = Rc::new(descriptor);
        self.registry.retain(&descriptor);
        let old = core::mem::replace(&mut self.items[index], descriptor);
        self.release(old.view_kind());
        self.emit_canonical(Change::ChangeAt(index));
        true
    }

    /// Removes the given ascending canonical indices, back to front, one event per run.
    fn remove_runs(&mut self, ascending: &[usize]) -> usize {
        let mut removed = 0;
        for (start, count) in runs(ascending).into_iter().rev() {
            let drained: Vec<_> = self.items.drain(start..start + count).collect();
            for descriptor in &drained {
                self.detach(descriptor);
            }
            removed += count;
            self.emit_canonical(Change::RemoveRange { start, count });
        }
        removed
    }

    fn collect_batch<I: IntoItem>(items: impl IntoIterator<Item = I>) -> Result<Vec<Descriptor>> {
        let batch: Vec<Descriptor> = items.into_iter().map(Descriptor::from_item).collect();
        if let Some(id) = first_duplicate(batch.iter().map(Descriptor::diffing_id)) {
            return Err(Error::DuplicateIdentity(String::from(id)));
        }
        Ok(batch)
    }

    /// Rejects batch ids that already live in the list, except those about to leave.
    fn check_collisions(&self, batch: &[Descriptor], leaving: &KeySet<&str>) -> Result<()> {
        match batch
            .iter()
            .map(Descriptor::diffing_id)
            .find(|id| self.ids.contains(*id) && !leaving.contains(id))
        {
            Some(id) => Err(Error::DuplicateIdentity(String::from(id))),
            None => Ok(()),
        }
    }

    fn splice_in(&mut self, index: usize, batch: Vec<Descriptor>) -> Range<usize> {
        let count = batch.len();
        if count == 0 {
            return index..index;
        }
        let attached: Vec<_> = batch.into_iter().map(|d| self.attach(d)).collect();
        self.items.splice(index..index, attached);
        self.emit_canonical(Change::InsertRange {
            start: index,
            count,
        });
        index..index + count
    }

    // --- structural writes (canonical indices) ---

    /// Appends an item. Returns its canonical index.
    pub fn push(&mut self, item: impl IntoItem) -> Result<usize> {
        self.insert(self.items.len(), item)
    }

    /// Inserts an item at `index`, clamped into `[0, canonical_len]`.
    pub fn insert(&mut self, index: usize, item: impl IntoItem) -> Result<usize> {
        self.insert_descriptor(index, Descriptor::from_item(item))
    }

    fn insert_descriptor(&mut self, index: usize, descriptor: Descriptor) -> Result<usize> {
        if self.ids.contains(descriptor.diffing_id()) {
            return Err(Error::DuplicateIdentity(String::from(
                descriptor.diffing_id(),
            )));
        }
        let index = index.min(self.items.len());
        rtrace!(index, id = descriptor.diffing_id(), "RecyclerList::insert");
        let descriptor = self.attach(descriptor);
        self.items.insert(index, descriptor);
        self.emit_canonical(Change::InsertRange {
            start: index,
            count: 1,
        });
        Ok(index)
    }

    /// Inserts a batch at `index` with one `InsertRange` notification.
    ///
    /// Nothing is inserted when any id repeats within the batch or already lives in the list.
    pub fn insert_many<I: IntoItem>(
        &mut self,
        index: usize,
        items: impl IntoIterator<Item = I>,
    ) -> Result<Range<usize>> {
        let len = self.items.len();
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        let batch = Self::collect_batch(items)?;
        self.check_collisions(&batch, &KeySet::new())?;
        rtrace!(index, count = batch.len(), "RecyclerList::insert_many");
        Ok(self.splice_in(index, batch))
    }

    /// Appends a batch with one `InsertRange` notification.
    pub fn extend<I: IntoItem>(
        &mut self,
        items: impl IntoIterator<Item = I>,
    ) -> Result<Range<usize>> {
        self.insert_many(self.items.len(), items)
    }

    /// Appends the item, or replaces the live item with the same id in place when it asks to be
    /// replaced.
    pub fn add_or_update(&mut self, item: impl IntoItem) -> Result<Update> {
        let descriptor = Descriptor::from_item(item);
        let Some(index) = self.canonical_position(descriptor.diffing_id()) else {
            return self
                .insert_descriptor(self.items.len(), descriptor)
                .map(Update::Inserted);
        };
        if self.items[index]
            .item()
            .has_to_be_replaced_by(descriptor.item())
        {
            self.replace_at(index, descriptor);
            Ok(Update::Replaced(index))
        } else {
            Ok(Update::Unchanged(index))
        }
    }

    /// Removes the item with this id. Returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.canonical_position(id) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Rc<Descriptor>> {
        let len = self.items.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        let descriptor = self.items.remove(index);
        self.detach(&descriptor);
        rtrace!(index, id = descriptor.diffing_id(), "RecyclerList::remove_at");
        self.emit_canonical(Change::RemoveRange {
            start: index,
            count: 1,
        });
        Ok(descriptor)
    }

    /// Removes every item with one `RemoveRange`. Silent when already empty.
    pub fn clear(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let drained: Vec<_> = self.items.drain(..).collect();
        for descriptor in &drained {
            self.detach(descriptor);
        }
        rtrace!(count = len, "RecyclerList::clear");
        self.emit_canonical(Change::RemoveRange {
            start: 0,
            count: len,
        });
    }

    /// Reconciles the canonical list against a full new snapshot.
    ///
    /// Items whose id survives keep their instance (and selection) unless the live item asks to
    /// be replaced by the incoming one. The emitted events take the host from the old rows to
    /// the new ones:
    /// - removals first, back to front, one `RemoveRange` per contiguous run
    /// - then moves for the survivors outside a longest in-order subsequence
    /// - then, front to back, one `InsertRange` per run of new items and a `ChangeAt` per
    ///   replaced survivor; a survivor replaced by an item of another view kind is reported as
    ///   `RemoveRange` then `InsertRange` at its index, and counted as removed and inserted
    ///
    /// Fails with [`Error::DuplicateIdentity`] before touching anything when the snapshot repeats
    /// an id. An empty snapshot clears the list.
    pub fn sync<I: IntoItem>(&mut self, items: impl IntoIterator<Item = I>) -> Result<SyncSummary> {
        let incoming = Self::collect_batch(items)?;
        let mut summary = SyncSummary::default();

        if incoming.is_empty() {
            summary.removed = self.items.len();
            self.clear();
            rdebug!(?summary, "RecyclerList::sync");
            return Ok(summary);
        }

        let targets: Vec<Option<usize>> = {
            let by_id: KeyMap<&str, usize> = incoming
                .iter()
                .enumerate()
                .map(|(i, d)| (d.diffing_id(), i))
                .collect();
            self.items
                .iter()
                .map(|d| by_id.get(d.diffing_id()).copied())
                .collect()
        };

        let gone: Vec<usize> = targets
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_none())
            .map(|(i, _)| i)
            .collect();
        summary.removed = self.remove_runs(&gone);

        // Survivors, in current order, with their target indices.
        let survivors = self.items.clone();
        let seq: Vec<usize> = targets.into_iter().flatten().collect();
        debug_assert_eq!(survivors.len(), seq.len());
        summary.moved = self.move_survivors(&survivors, &seq);

        let mut cursor = 0;
        let mut run: Option<(usize, usize)> = None;
        for descriptor in incoming {
            if self.ids.contains(descriptor.diffing_id()) {
                if let Some((start, count)) = run.take() {
                    self.emit_canonical(Change::InsertRange { start, count });
                }
                debug_assert_eq!(self.items[cursor].diffing_id(), descriptor.diffing_id());
                if self.items[cursor]
                    .item()
                    .has_to_be_replaced_by(descriptor.item())
                {
                    if self.replace_at(cursor, descriptor) {
                        summary.replaced += 1;
                    } else {
                        summary.removed += 1;
                        summary.inserted += 1;
                    }
                }
            } else {
                let descriptor = self.attach(descriptor);
                self.items.insert(cursor, descriptor);
                summary.inserted += 1;
                match &mut run {
                    Some((_, count)) => *count += 1,
                    None => run = Some((cursor, 1)),
                }
            }
            cursor += 1;
        }
        if let Some((start, count)) = run {
            self.emit_canonical(Change::InsertRange { start, count });
        }

        rdebug!(?summary, len = self.items.len(), "RecyclerList::sync");
        Ok(summary)
    }

    /// Moves every survivor that is not on a longest increasing run of `seq` directly behind its
    /// predecessor in target order. Returns the number of `Move` events.
    fn move_survivors(&mut self, survivors: &[Rc<Descriptor>], seq: &[usize]) -> usize {
        let stays = lis_mask(seq);
        let mut by_target: Vec<usize> = (0..seq.len()).collect();
        by_target.sort_unstable_by_key(|&k| seq[k]);

        let mut moved = 0;
        let mut prev: Option<&Rc<Descriptor>> = None;
        for k in by_target {
            let current = &survivors[k];
            if !stays[k] {
                let from = self.canonical_index_of(current);
                let to = match prev.map(|p| self.canonical_index_of(p)) {
                    None => 0,
                    Some(p) if from > p => p + 1,
                    Some(p) => p,
                };
                if from != to {
                    let descriptor = self.items.remove(from);
                    self.items.insert(to, descriptor);
                    self.emit_canonical(Change::Move { from, to });
                    moved += 1;
                }
            }
            prev = Some(current);
        }
        moved
    }

    fn canonical_index_of(&self, descriptor: &Rc<Descriptor>) -> usize {
        let found = self.items.iter().position(|d| Rc::ptr_eq(d, descriptor));
        debug_assert!(found.is_some(), "survivor vanished during sync");
        found.unwrap_or(0)
    }

    /// Exchanges two rows of the active view.
    ///
    /// Adjacent rows report one `Move`; otherwise two moves (`lo -> hi`, then `hi - 1 -> lo`).
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let len = self.len();
        for index in [a, b] {
            if index >= len {
                return Err(Error::IndexOutOfRange { index, len });
            }
        }
        if a == b {
            return Ok(());
        }
        let (lo, hi) = (a.min(b), a.max(b));
        rtrace!(lo, hi, "RecyclerList::swap");

        if hi == lo + 1 {
            self.view.active_mut(&mut self.items).swap(lo, hi);
            self.emit(Change::Move { from: a, to: b });
            return Ok(());
        }

        self.move_active(lo, hi);
        self.emit(Change::Move { from: lo, to: hi });
        self.move_active(hi - 1, lo);
        self.emit(Change::Move {
            from: hi - 1,
            to: lo,
        });
        Ok(())
    }

    fn move_active(&mut self, from: usize, to: usize) {
        let view = self.view.active_mut(&mut self.items);
        let descriptor = view.remove(from);
        view.insert(to, descriptor);
    }

    // --- filter / sort ---

    /// Recomputes the filtered projection from the canonical list. A blank term disables
    /// filtering. Always emits `FullRefresh`.
    pub fn filter(&mut self, term: &str) {
        self.view = Projection::apply(&self.items, term);
        rdebug!(
            term,
            filtered = self.view.is_filtered(),
            visible = self.len(),
            "RecyclerList::filter"
        );
        self.emit(Change::FullRefresh);
    }

    pub fn clear_filter(&mut self) {
        self.view = Projection::Canonical;
        rdebug!("RecyclerList::clear_filter");
        self.emit(Change::FullRefresh);
    }

    /// Stable sort of the active view by [`Item::compare`].
    pub fn sort(&mut self, ascending: bool) {
        self.sort_by(ascending, |a, b| a.compare(b));
    }

    /// Stable sort of the active view by a caller comparator. Descending order reverses the
    /// comparator, so equal items keep their relative order either way.
    ///
    /// Emits `FullRefresh`, except on an empty view.
    pub fn sort_by(
        &mut self,
        ascending: bool,
        mut cmp: impl FnMut(&dyn Item, &dyn Item) -> Ordering,
    ) {
        let view = self.view.active_mut(&mut self.items);
        if view.is_empty() {
            return;
        }
        if ascending {
            view.sort_by(|a, b| cmp(a.item(), b.item()));
        } else {
            view.sort_by(|a, b| cmp(b.item(), a.item()));
        }
        rdebug!(ascending, len = view.len(), "RecyclerList::sort_by");
        self.emit(Change::FullRefresh);
    }

    // --- kinds and events ---

    /// Removes every item of `kind` that `predicate` accepts (one `RemoveRange` per run), then
    /// drops the kind from the registry once no live item uses it. Returns the removed count.
    pub fn remove_all_of_kind(
        &mut self,
        kind: ViewKind,
        mut predicate: impl FnMut(&Descriptor) -> bool,
    ) -> usize {
        let doomed: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, d)| d.view_kind() == kind && predicate(d))
            .map(|(i, _)| i)
            .collect();
        let removed = self.remove_runs(&doomed);
        if self.registry.live_count(kind) == 0 {
            self.registry.prune(kind);
        }
        rtrace!(kind = kind.get(), removed, "RecyclerList::remove_all_of_kind");
        removed
    }

    /// The last canonical item of `kind`, with its canonical index.
    pub fn last_of_kind(&self, kind: ViewKind) -> Option<(usize, &Rc<Descriptor>)> {
        self.items
            .iter()
            .enumerate()
            .rev()
            .find(|(_, d)| d.view_kind() == kind)
    }

    pub fn remove_last_of_kind(&mut self, kind: ViewKind) -> bool {
        match self.last_of_kind(kind) {
            Some((index, _)) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Routes an item-level event from the view at active-view `index` to its item. Emits
    /// `ChangeAt(index)` and returns `true` when the item asks for a rebind.
    pub fn dispatch_event(&mut self, index: usize, event: &dyn Any) -> Result<bool> {
        let descriptor = self.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })?;
        if descriptor.item().on_event(index, event) {
            self.emit(Change::ChangeAt(index));
            return Ok(true);
        }
        Ok(false)
    }

    // --- selection ---

    /// Sets a group's toggle policy. Existing flags are left as they are.
    pub fn set_selection_group_policy(&mut self, group: &str, multi_select: bool) {
        self.groups.set_policy(group, multi_select);
    }

    pub fn selection_group_policy(&self, group: &str) -> GroupPolicy {
        self.groups.policy(group)
    }

    /// Installs the observer of a group, replacing any previous one. The list owns it until
    /// [`Self::remove_selection_group_listener`].
    pub fn set_selection_group_listener(
        &mut self,
        group: &str,
        listener: impl FnMut(&str, &[Rc<Descriptor>]) + 'static,
    ) {
        self.groups.set_listener(group, Box::new(listener));
    }

    pub fn remove_selection_group_listener(&mut self, group: &str) -> bool {
        self.groups.remove_listener(group)
    }

    pub fn has_selection_group_listener(&self, group: &str) -> bool {
        self.groups.has_listener(group)
    }

    /// Handles a tap on the row at active-view `index`.
    ///
    /// Multi-select groups toggle the item. Single-select groups select it and clear every other
    /// member, filtered out or not. Each flipped item whose `on_selection_changed` asks for a
    /// rebind gets a `ChangeAt` at its visible position.
    ///
    /// Returns the reported selection (also passed to the group's observer) for multi-select
    /// groups, and for single-select groups when the item was not selected yet. Items without a
    /// group, and rows of a stale filtered view whose item was removed or replaced since, yield
    /// `Ok(None)`.
    pub fn activate(&mut self, index: usize) -> Result<Option<SelectionEvent>> {
        let target = self.get(index).cloned().ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })?;
        // A stale projection can still show items that left the canonical list.
        if !self.items.iter().any(|d| Rc::ptr_eq(d, &target)) {
            rtrace!(index, id = target.diffing_id(), "activate: row is no longer live");
            return Ok(None);
        }
        Ok(self.activate_descriptor(&target))
    }

    /// Activates the live item with this id, as if its row was tapped.
    pub fn select(&mut self, id: &str) -> Option<SelectionEvent> {
        let index = self.canonical_position(id)?;
        let target = Rc::clone(&self.items[index]);
        self.activate_descriptor(&target)
    }

    fn activate_descriptor(&mut self, target: &Rc<Descriptor>) -> Option<SelectionEvent> {
        let activation = self.groups.activate(&self.items, target)?;
        rtrace!(
            group = activation.group.as_str(),
            flipped = activation.flipped.len(),
            "RecyclerList::activate"
        );

        for descriptor in &activation.flipped {
            if !descriptor
                .item()
                .on_selection_changed(descriptor.is_selected())
            {
                continue;
            }
            if let Some(position) = self.view.position_of(&self.items, descriptor) {
                self.emit(Change::ChangeAt(position));
            }
        }

        if !activation.report {
            return None;
        }
        let selected = selected_in(&self.items, &activation.group);
        self.groups.notify(&activation.group, &selected);
        Some(SelectionEvent {
            group: activation.group,
            selected,
        })
    }

    /// Selected members of `group`, in canonical order.
    pub fn selected_items(&self, group: &str) -> Vec<Rc<Descriptor>> {
        selected_in(&self.items, group)
    }

    /// Replaces every member of `group` with `items`, inserted where the first member was.
    ///
    /// Does nothing when the group has no members. Ids are validated before any mutation;
    /// new ids may reuse ids of the members being replaced.
    pub fn replace_selection_group_items<I: IntoItem>(
        &mut self,
        group: &str,
        items: impl IntoIterator<Item = I>,
    ) -> Result<()> {
        let members = member_indices(&self.items, group);
        let Some(&at) = members.first() else {
            return Ok(());
        };
        let batch = Self::collect_batch(items)?;
        {
            let leaving: KeySet<&str> = members
                .iter()
                .map(|&i| self.items[i].diffing_id())
                .collect();
            self.check_collisions(&batch, &leaving)?;
        }
        rtrace!(
            group,
            removed = members.len(),
            inserted = batch.len(),
            "RecyclerList::replace_selection_group_items"
        );
        self.remove_runs(&members);
        self.splice_in(at, batch);
        Ok(())
    }
}

impl core::fmt::Debug for RecyclerList {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecyclerList")
            .field("len", &self.items.len())
            .field("search_term", &self.view.term())
            .field("visible", &self.len())
            .field("kinds", &self.registry.len())
            .field("groups", &self.groups)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
