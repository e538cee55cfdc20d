#[cfg(not(feature = "std"))]
use alloc::collections::{BTreeMap, BTreeSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

// Diffing ids, group names and view kinds are all `Hash + Ord`, so the same call sites work with
// either backing collection.
#[cfg(feature = "std")]
pub(crate) type KeyMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyMap<K, V> = BTreeMap<K, V>;

#[cfg(feature = "std")]
pub(crate) type KeySet<K> = HashSet<K>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySet<K> = BTreeSet<K>;
