//! A headless view-recycling list engine.
//!
//! For host-side glue (empty placeholder row, holder create/bind/recycle workflows), see the
//! `recycler-adapter` crate.
//!
//! This crate keeps an ordered list of heterogeneous item descriptors and reconciles it against
//! new snapshots with the smallest practical set of change notifications: keyed diffing with
//! insert/remove/move detection, a view-kind registry for holder reuse, single/multi-select
//! selection groups, and a filtered projection for search.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a change sink that replays [`Change`] events onto its rows
//! - view factories and bind functions per item kind (see [`ViewBinders`])
//! - activation signals (`activate(index)`) when a row is tapped/clicked
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod change;
mod diff;
mod error;
mod item;
mod key;
mod list;
mod options;
mod pool;
mod projection;
mod registry;
mod selection;
mod types;
mod view;


pub use change::Change;
pub use error::{Error, Result};
pub use item::{AsAny, Descriptor, IntoItem, Item, ViewKind, downcast_item};
pub use list::RecyclerList;
pub use options::{ListOptions, OnChangeCallback};
pub use pool::{DEFAULT_MAX_RECYCLED, SharedViewPool, ViewPool};
pub use registry::TypeRegistry;
pub use selection::{GroupPolicy, SelectionEvent, SelectionListener};
pub use types::{SyncSummary, Update};
pub use view::{BindContext, Holder, ViewBinders};
