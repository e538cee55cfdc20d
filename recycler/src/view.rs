use alloc::boxed::Box;

use crate::key::KeyMap;
use crate::{Descriptor, Error, Item, Result, ViewKind, downcast_item};

/// What a bind function gets to know besides the item itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BindContext {
    /// Row index in the active view.
    pub position: usize,
    /// `true` unless the holder was last bound to this same item (fresh or recycled holder).
    pub first_time: bool,
    pub selected: bool,
}

/// A reusable view object together with its recycling bookkeeping.
#[derive(Debug)]
pub struct Holder<H> {
    kind: ViewKind,
    view: H,
    bound_id: Option<Box<str>>,
    position: Option<usize>,
    binds: u64,
}

impl<H> Holder<H> {
    pub fn new(kind: ViewKind, view: H) -> Self {
        Self {
            kind,
            view,
            bound_id: None,
            position: None,
            binds: 0,
        }
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn view(&self) -> &H {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut H {
        &mut self.view
    }

    pub fn into_view(self) -> H {
        self.view
    }

    /// Diffing id of the item this holder was last bound to.
    pub fn bound_id(&self) -> Option<&str> {
        self.bound_id.as_deref()
    }

    /// Position passed to the last bind.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Number of binds since creation (recycling does not reset it).
    pub fn bind_count(&self) -> u64 {
        self.binds
    }

    pub fn is_bound(&self) -> bool {
        self.bound_id.is_some()
    }

    fn mark_bound(&mut self, id: &str, position: usize) {
        if self.bound_id.as_deref() != Some(id) {
            self.bound_id = Some(Box::from(id));
        }
        self.position = Some(position);
        self.binds = self.binds.saturating_add(1);
    }

    /// Forgets the last binding. Called when the holder goes back to a pool.
    pub fn unbind(&mut self) {
        self.bound_id = None;
        self.position = None;
    }
}

type CreateFn<H> = Box<dyn Fn(&dyn Item) -> Option<H>>;
type BindFn<H> = Box<dyn Fn(&mut H, &dyn Item, BindContext) -> bool>;

struct Binder<H> {
    name: &'static str,
    create: CreateFn<H>,
    bind: BindFn<H>,
}

/// Capability table: one view factory and one bind function per view kind.
///
/// Every concrete item kind registers explicitly; there is no reflection. `H` is the host's
/// view type (a widget handle, a node id, a TUI cell buffer, ...).
pub struct ViewBinders<H> {
    binders: KeyMap<ViewKind, Binder<H>>,
}

impl<H> Default for ViewBinders<H> {
    fn default() -> Self {
        Self {
            binders: KeyMap::new(),
        }
    }
}

impl<H: 'static> ViewBinders<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the factory and bind function for items of type `T`, under `ViewKind::of::<T>()`.
    ///
    /// `create` receives the kind's exemplar item (never bound with data); `bind` populates a
    /// holder's view for one item.
    pub fn register<T: Item>(
        &mut self,
        create: impl Fn(&T) -> H + 'static,
        bind: impl Fn(&mut H, &T, BindContext) + 'static,
    ) -> &mut Self {
        self.register_as(ViewKind::of::<T>(), create, bind)
    }

    /// Like [`Self::register`], for item types that override [`Item::view_kind`].
    pub fn register_as<T: Item>(
        &mut self,
        kind: ViewKind,
        create: impl Fn(&T) -> H + 'static,
        bind: impl Fn(&mut H, &T, BindContext) + 'static,
    ) -> &mut Self {
        let binder = Binder {
            name: core::any::type_name::<T>(),
            create: Box::new(move |item: &dyn Item| downcast_item::<T>(item).map(&create)),
            bind: Box::new(move |view: &mut H, item: &dyn Item, cx: BindContext| {
                match downcast_item::<T>(item) {
                    Some(item) => {
                        bind(view, item, cx);
                        true
                    }
                    None => false,
                }
            }),
        };
        if self.binders.insert(kind, binder).is_some() {
            rdebug!(kind = kind.get(), "replaced view binder");
        }
        self
    }

    /// Builder-style [`Self::register`].
    pub fn with<T: Item>(
        mut self,
        create: impl Fn(&T) -> H + 'static,
        bind: impl Fn(&mut H, &T, BindContext) + 'static,
    ) -> Self {
        self.register(create, bind);
        self
    }

    pub fn contains(&self, kind: ViewKind) -> bool {
        self.binders.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.binders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binders.is_empty()
    }

    /// Manufactures a fresh, unbound holder from a kind's exemplar.
    pub fn create(&self, exemplar: &Descriptor) -> Result<Holder<H>> {
        let kind = exemplar.view_kind();
        let binder = self.binder(kind)?;
        let view = (binder.create)(exemplar.item()).ok_or(Error::KindMismatch {
            kind,
            expected: binder.name,
            found: exemplar.kind_name(),
        })?;
        rtrace!(kind = kind.get(), "create holder");
        Ok(Holder::new(kind, view))
    }

    /// Binds `descriptor` into `holder` for row `position`.
    pub fn bind(
        &self,
        holder: &mut Holder<H>,
        descriptor: &Descriptor,
        position: usize,
    ) -> Result<()> {
        let kind = descriptor.view_kind();
        if holder.kind != kind {
            rwarn!(
                holder_kind = holder.kind.get(),
                item_kind = kind.get(),
                "bind: holder of another kind"
            );
            return Err(Error::KindMismatch {
                kind: holder.kind,
                expected: self.binders.get(&holder.kind).map_or("<unregistered>", |b| b.name),
                found: descriptor.kind_name(),
            });
        }
        let binder = self.binder(kind)?;
        let cx = BindContext {
            position,
            first_time: holder.bound_id() != Some(descriptor.diffing_id()),
            selected: descriptor.is_selected(),
        };
        if !(binder.bind)(&mut holder.view, descriptor.item(), cx) {
            return Err(Error::KindMismatch {
                kind,
                expected: binder.name,
                found: descriptor.kind_name(),
            });
        }
        holder.mark_bound(descriptor.diffing_id(), position);
        Ok(())
    }

    fn binder(&self, kind: ViewKind) -> Result<&Binder<H>> {
        self.binders.get(&kind).ok_or(Error::UnknownViewKind(kind))
    }
}

impl<H> core::fmt::Debug for ViewBinders<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewBinders")
            .field("kinds", &self.binders.len())
            .finish_non_exhaustive()
    }
}
