//! Adapter utilities for the `recycler` crate.
//!
//! The `recycler` crate is UI-agnostic and focuses on list state and change notifications. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - An empty placeholder row shown while the list has nothing to display
//! - Holder workflows: obtain (recycle or create, then bind), recycle, stable row ids
//! - A caller-owned holder pool shared between several lists
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod adapter;
mod slot;

#[cfg(test)]
mod tests;

pub use adapter::Adapter;
pub use slot::RowSlot;
