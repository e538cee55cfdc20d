use alloc::borrow::Cow;
use alloc::boxed::Box;
use core::any::Any;
use core::cell::Cell;
use core::cmp::Ordering;
use core::fmt;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

pub(crate) const fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// Numeric identifier of a view kind: the equivalence class of items that share one holder
/// layout and one bind function.
///
/// Derived deterministically from the concrete item type name, so the same type maps to the same
/// kind across lists and runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewKind(pub u64);

impl ViewKind {
    /// The kind for a concrete item type.
    pub fn of<T: ?Sized>() -> Self {
        Self::from_name(core::any::type_name::<T>())
    }

    pub const fn from_name(name: &str) -> Self {
        Self(fnv1a(name.as_bytes()))
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Upcast helper so `&dyn Item` can be downcast to its concrete type.
///
/// Blanket-implemented for every `'static` type; you never implement it yourself.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The behavior contract of one list row.
///
/// Implementors describe *what* a row is (its identity, its group, how it filters and sorts)
/// while the list owns the runtime state (the `selected` flag lives on [`Descriptor`]).
///
/// Two items are "the same item" iff their [`Item::diffing_id`] values are equal. Include a
/// type prefix in the id when different item types may model the same entity.
pub trait Item: AsAny {
    /// Stable identity used by every diffing operation.
    fn diffing_id(&self) -> Cow<'_, str>;

    /// The view kind of this item. Defaults to a hash of the concrete type name.
    fn view_kind(&self) -> ViewKind {
        ViewKind::of::<Self>()
    }

    fn kind_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// The selection group this item belongs to. Items without a group are not selectable.
    fn selection_group(&self) -> Option<&str> {
        None
    }

    /// Called when a same-identity item arrives through `sync` or `add_or_update`.
    ///
    /// Return `true` when the new item differs enough to require a rebind. Returning `false`
    /// keeps the current instance, including its selection state.
    fn has_to_be_replaced_by(&self, _new_item: &dyn Item) -> bool {
        true
    }

    /// Whether this item matches a (non-blank) search term.
    fn on_filter(&self, _search_term: &str) -> bool {
        true
    }

    /// Called after the selection flag flipped. Return `true` to request a rebind.
    fn on_selection_changed(&self, _is_now_selected: bool) -> bool {
        true
    }

    /// Item-level event raised by a bound view. Return `true` to request a rebind.
    fn on_event(&self, _position: usize, _event: &dyn Any) -> bool {
        false
    }

    /// Natural order used by `RecyclerList::sort`.
    fn compare(&self, _other: &dyn Item) -> Ordering {
        Ordering::Equal
    }
}

/// Downcasts a type-erased item to its concrete type.
pub fn downcast_item<T: Item>(item: &dyn Item) -> Option<&T> {
    item.as_any().downcast_ref::<T>()
}

/// Conversion into a boxed item, so list operations accept both concrete items and
/// already-erased `Box<dyn Item>` values.
pub trait IntoItem {
    fn into_item(self) -> Box<dyn Item>;
}

impl<T: Item> IntoItem for T {
    fn into_item(self) -> Box<dyn Item> {
        Box::new(self)
    }
}

impl IntoItem for Box<dyn Item> {
    fn into_item(self) -> Box<dyn Item> {
        self
    }
}

/// One row of a [`crate::RecyclerList`]: an [`Item`] plus the runtime state the list owns.
///
/// Lists hand out `Rc<Descriptor>`; `Rc::ptr_eq` is instance identity. A `sync` that keeps an
/// item keeps its descriptor, and with it the `selected` flag.
pub struct Descriptor {
    id: Box<str>,
    kind: ViewKind,
    selected: Cell<bool>,
    item: Box<dyn Item>,
}

impl Descriptor {
    pub fn new(item: Box<dyn Item>) -> Self {
        let id = Box::from(item.diffing_id().as_ref());
        let kind = item.view_kind();
        Self {
            id,
            kind,
            selected: Cell::new(false),
            item,
        }
    }

    pub fn from_item(item: impl IntoItem) -> Self {
        Self::new(item.into_item())
    }

    pub fn diffing_id(&self) -> &str {
        &self.id
    }

    pub fn view_kind(&self) -> ViewKind {
        self.kind
    }

    pub fn kind_name(&self) -> &'static str {
        self.item().kind_name()
    }

    pub fn item(&self) -> &dyn Item {
        &*self.item
    }

    pub fn downcast_ref<T: Item>(&self) -> Option<&T> {
        downcast_item::<T>(self.item())
    }

    pub fn selection_group(&self) -> Option<&str> {
        self.item().selection_group()
    }

    pub fn is_selected(&self) -> bool {
        self.selected.get()
    }

    /// Sets the flag and returns whether it actually flipped.
    pub(crate) fn set_selected(&self, selected: bool) -> bool {
        self.selected.replace(selected) != selected
    }

    /// Whether both descriptors describe the same real-world item.
    pub fn same_item(&self, other: &Descriptor) -> bool {
        self.id == other.id
    }

    /// A stable 64-bit row id derived from the diffing id.
    pub fn stable_id(&self) -> u64 {
        fnv1a(self.id.as_bytes())
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("kind_name", &self.kind_name())
            .field("selected", &self.selected.get())
            .finish_non_exhaustive()
    }
}
