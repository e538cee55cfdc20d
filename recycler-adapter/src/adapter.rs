use alloc::rc::Rc;
use core::any::Any;
use core::cell::{Cell, RefCell};

use recycler::{
    Change, Descriptor, Error, Holder, IntoItem, ListOptions, OnChangeCallback, RecyclerList,
    Result, SelectionEvent, SharedViewPool, ViewBinders, ViewKind,
};

use crate::RowSlot;

type Sink = Rc<RefCell<Option<OnChangeCallback>>>;

/// A framework-neutral controller that wraps a `recycler::RecyclerList` and provides common
/// adapter workflows (empty placeholder row, holder obtain/recycle).
///
/// This type does not hold any UI objects besides pooled holders. Adapters drive it by calling:
/// - `item_count` / `view_kind` / `obtain` when the view-list surface asks for rows
/// - `recycle` when a row scrolls out of view
/// - `activate` when a row is tapped/clicked
///
/// Change events reach the `on_change` callback in adapter positions: while a placeholder item
/// is set and the list is empty, position 0 is the placeholder row.
pub struct Adapter<H> {
    list: RecyclerList,
    binders: ViewBinders<H>,
    pool: SharedViewPool<H>,
    empty: Option<Rc<Descriptor>>,
    has_empty: Rc<Cell<bool>>,
    sink: Sink,
}

impl<H: 'static> Adapter<H> {
    /// Creates an adapter with a private holder pool. `options.on_change` receives adapter
    /// positions.
    pub fn new(options: ListOptions, binders: ViewBinders<H>) -> Self {
        Self::with_pool(options, binders, SharedViewPool::default())
    }

    /// Creates an adapter that recycles through a pool shared with other adapters.
    pub fn with_pool(
        options: ListOptions,
        binders: ViewBinders<H>,
        pool: SharedViewPool<H>,
    ) -> Self {
        Self::from_list(RecyclerList::new(options), binders, pool)
    }

    /// Wraps an existing list. Its `on_change` callback moves to the adapter.
    pub fn from_list(
        mut list: RecyclerList,
        binders: ViewBinders<H>,
        pool: SharedViewPool<H>,
    ) -> Self {
        let sink: Sink = Rc::new(RefCell::new(list.options().on_change.clone()));
        let has_empty = Rc::new(Cell::new(false));
        install_translator(&mut list, Rc::clone(&has_empty), Rc::clone(&sink));
        Self {
            list,
            binders,
            pool,
            empty: None,
            has_empty,
            sink,
        }
    }

    pub fn list(&self) -> &RecyclerList {
        &self.list
    }

    /// Mutable access to the wrapped list.
    ///
    /// Do not replace the list's `on_change` callback through this; use
    /// [`Adapter::set_on_change`].
    pub fn list_mut(&mut self) -> &mut RecyclerList {
        &mut self.list
    }

    pub fn binders(&self) -> &ViewBinders<H> {
        &self.binders
    }

    pub fn binders_mut(&mut self) -> &mut ViewBinders<H> {
        &mut self.binders
    }

    pub fn pool(&self) -> &SharedViewPool<H> {
        &self.pool
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&RecyclerList, Change) + 'static>) {
        *self.sink.borrow_mut() = on_change.map(|f| Rc::new(f) as _);
    }

    fn notify(&self, change: Change) {
        let sink = self.sink.borrow().clone();
        if let Some(sink) = sink {
            sink(&self.list, change);
        }
    }

    // --- placeholder ---

    /// Sets the row shown while the list is empty. Returns the previous placeholder.
    ///
    /// A shown placeholder of the same kind is rebound (`ChangeAt(0)`); one of another kind is
    /// removed and the new one inserted.
    pub fn set_empty_item(&mut self, item: impl IntoItem) -> Option<Rc<Descriptor>> {
        let was_showing = self.is_showing_empty_item();
        let next = Rc::new(Descriptor::from_item(item));
        let kind = next.view_kind();
        let previous = self.empty.replace(next);
        self.has_empty.set(true);
        adebug!(showing = self.list.is_empty(), "Adapter::set_empty_item");
        match &previous {
            Some(old) if was_showing && old.view_kind() == kind => {
                self.notify(Change::ChangeAt(0));
            }
            Some(_) if was_showing => {
                self.notify(Change::RemoveRange { start: 0, count: 1 });
                self.notify(Change::InsertRange { start: 0, count: 1 });
            }
            _ if self.list.is_empty() => {
                self.notify(Change::InsertRange { start: 0, count: 1 });
            }
            _ => {}
        }
        previous
    }

    pub fn clear_empty_item(&mut self) -> Option<Rc<Descriptor>> {
        let was_showing = self.is_showing_empty_item();
        let previous = self.empty.take();
        self.has_empty.set(false);
        if was_showing {
            self.notify(Change::RemoveRange { start: 0, count: 1 });
        }
        previous
    }

    pub fn empty_item(&self) -> Option<&Rc<Descriptor>> {
        self.empty.as_ref()
    }

    pub fn is_showing_empty_item(&self) -> bool {
        self.empty.is_some() && self.list.is_empty()
    }

    // --- rows ---

    /// Number of rows the view-list surface shows.
    pub fn item_count(&self) -> usize {
        if self.is_showing_empty_item() {
            1
        } else {
            self.list.len()
        }
    }

    pub fn slot(&self, position: usize) -> Option<RowSlot> {
        if self.is_showing_empty_item() {
            return (position == 0).then_some(RowSlot::Placeholder);
        }
        (position < self.list.len()).then_some(RowSlot::Item(position))
    }

    pub fn descriptor_at(&self, position: usize) -> Result<&Rc<Descriptor>> {
        let found = match self.slot(position) {
            Some(RowSlot::Placeholder) => self.empty.as_ref(),
            Some(RowSlot::Item(index)) => self.list.get(index),
            None => None,
        };
        found.ok_or(Error::IndexOutOfRange {
            index: position,
            len: self.item_count(),
        })
    }

    pub fn view_kind(&self, position: usize) -> Result<ViewKind> {
        self.descriptor_at(position).map(|d| d.view_kind())
    }

    /// A stable 64-bit id for the row, derived from the item's diffing id.
    pub fn stable_id(&self, position: usize) -> Result<u64> {
        self.descriptor_at(position).map(|d| d.stable_id())
    }

    fn exemplar(&self, kind: ViewKind) -> Result<&Rc<Descriptor>> {
        match &self.empty {
            Some(empty) if empty.view_kind() == kind && !self.list.registry().contains(kind) => {
                Ok(empty)
            }
            _ => self.list.exemplar(kind),
        }
    }

    // --- holders ---

    /// Manufactures a fresh holder for `kind` from the kind's exemplar.
    pub fn create_holder(&self, kind: ViewKind) -> Result<Holder<H>> {
        self.binders.create(self.exemplar(kind)?)
    }

    pub fn bind_holder(&self, holder: &mut Holder<H>, position: usize) -> Result<()> {
        let descriptor = self.descriptor_at(position)?;
        self.binders.bind(holder, descriptor, position)
    }

    /// Returns a holder bound to `position`, reusing a recycled one of the right kind when the
    /// pool has any.
    pub fn obtain(&self, position: usize) -> Result<Holder<H>> {
        let kind = self.view_kind(position)?;
        let mut holder = match self.pool.take(kind) {
            Some(holder) => holder,
            None => {
                atrace!(position, kind = kind.get(), "Adapter::obtain: create");
                self.create_holder(kind)?
            }
        };
        self.bind_holder(&mut holder, position)?;
        Ok(holder)
    }

    /// Hands a holder that left the screen back to the pool.
    pub fn recycle(&self, holder: Holder<H>) -> bool {
        self.pool.put(holder)
    }

    // --- input ---

    /// Routes a tap to the list. The placeholder row is inert.
    pub fn activate(&mut self, position: usize) -> Result<Option<SelectionEvent>> {
        match self.slot(position) {
            Some(RowSlot::Placeholder) => Ok(None),
            _ => self.list.activate(position),
        }
    }

    pub fn select(&mut self, id: &str) -> Option<SelectionEvent> {
        self.list.select(id)
    }

    pub fn dispatch_event(&mut self, position: usize, event: &dyn Any) -> Result<bool> {
        match self.slot(position) {
            Some(RowSlot::Placeholder) => Ok(false),
            _ => self.list.dispatch_event(position, event),
        }
    }
}

/// Puts the placeholder row into the list's change stream before forwarding it.
fn install_translator(list: &mut RecyclerList, has_empty: Rc<Cell<bool>>, sink: Sink) {
    list.set_on_change(Some(move |list: &RecyclerList, change: Change| {
        let Some(sink) = sink.borrow().clone() else {
            return;
        };
        let placeholder = has_empty.get();
        match change {
            Change::InsertRange { count, .. } if placeholder && list.len() == count => {
                atrace!("placeholder out");
                sink(list, Change::RemoveRange { start: 0, count: 1 });
                sink(list, change);
            }
            Change::RemoveRange { .. } if placeholder && list.is_empty() => {
                sink(list, change);
                atrace!("placeholder in");
                sink(list, Change::InsertRange { start: 0, count: 1 });
            }
            _ => sink(list, change),
        }
    }));
}

impl<H> core::fmt::Debug for Adapter<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Adapter")
            .field("list", &self.list)
            .field("binders", &self.binders)
            .field("empty", &self.empty)
            .finish_non_exhaustive()
    }
}
