/// What an adapter row position shows.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowSlot {
    /// The empty placeholder row (only ever at position 0, while the list is empty).
    Placeholder,
    /// A list row, by active-view index.
    Item(usize),
}

impl RowSlot {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    pub fn item_index(&self) -> Option<usize> {
        match *self {
            Self::Placeholder => None,
            Self::Item(index) => Some(index),
        }
    }
}
