use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Ref, RefCell, RefMut};

use crate::key::KeyMap;
use crate::{Holder, ViewKind};

/// Default number of recycled holders kept per view kind.
pub const DEFAULT_MAX_RECYCLED: usize = 5;

/// A pool of recycled holders, bucketed by view kind.
///
/// Pools are created by the caller and handed to whichever lists should share them (see
/// [`SharedViewPool`]). There is no process-wide default pool.
#[derive(Debug)]
pub struct ViewPool<H> {
    scrap: KeyMap<ViewKind, Vec<Holder<H>>>,
    max_recycled: KeyMap<ViewKind, usize>,
    default_max_recycled: usize,
}

impl<H> Default for ViewPool<H> {
    fn default() -> Self {
        Self::with_default_max_recycled(DEFAULT_MAX_RECYCLED)
    }
}

impl<H> ViewPool<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_max_recycled(default_max_recycled: usize) -> Self {
        Self {
            scrap: KeyMap::new(),
            max_recycled: KeyMap::new(),
            default_max_recycled,
        }
    }

    /// Caps the recycled holders kept for one kind. Drops any excess immediately.
    pub fn set_max_recycled(&mut self, kind: ViewKind, max: usize) {
        self.max_recycled.insert(kind, max);
        if let Some(scrap) = self.scrap.get_mut(&kind) {
            scrap.truncate(max);
        }
    }

    pub fn max_recycled(&self, kind: ViewKind) -> usize {
        self.max_recycled
            .get(&kind)
            .copied()
            .unwrap_or(self.default_max_recycled)
    }

    /// Returns a holder to the pool. Returns `false` (and drops the holder) when the kind's
    /// bucket is full.
    pub fn put(&mut self, mut holder: Holder<H>) -> bool {
        let kind = holder.kind();
        let max = self.max_recycled(kind);
        let scrap = self.scrap.entry(kind).or_default();
        if scrap.len() >= max {
            rtrace!(kind = kind.get(), max, "pool full; dropping holder");
            return false;
        }
        holder.unbind();
        scrap.push(holder);
        true
    }

    /// Takes a recycled holder of this kind, if any.
    pub fn take(&mut self, kind: ViewKind) -> Option<Holder<H>> {
        self.scrap.get_mut(&kind).and_then(Vec::pop)
    }

    pub fn recycled_count(&self, kind: ViewKind) -> usize {
        self.scrap.get(&kind).map_or(0, Vec::len)
    }

    pub fn len(&self) -> usize {
        self.scrap.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.scrap.values().all(Vec::is_empty)
    }

    pub fn clear(&mut self) {
        self.scrap.clear();
    }
}

/// A cloneable handle to one [`ViewPool`], for sharing recycled holders between lists.
#[derive(Debug)]
pub struct SharedViewPool<H>(Rc<RefCell<ViewPool<H>>>);

impl<H> Clone for SharedViewPool<H> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<H> Default for SharedViewPool<H> {
    fn default() -> Self {
        Self::new(ViewPool::default())
    }
}

impl<H> SharedViewPool<H> {
    pub fn new(pool: ViewPool<H>) -> Self {
        Self(Rc::new(RefCell::new(pool)))
    }

    pub fn borrow(&self) -> Ref<'_, ViewPool<H>> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, ViewPool<H>> {
        self.0.borrow_mut()
    }

    pub fn put(&self, holder: Holder<H>) -> bool {
        self.0.borrow_mut().put(holder)
    }

    pub fn take(&self, kind: ViewKind) -> Option<Holder<H>> {
        self.0.borrow_mut().take(kind)
    }

    /// Whether both handles point at the same pool.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
