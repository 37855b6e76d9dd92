//! Host adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and owns only the math and state. This crate connects it
//! to a host scene through two small traits:
//!
//! - [`ScrollHost`]: viewport geometry, item enumeration/instantiation, and the content offset
//! - [`ItemHandle`]: per-item offset and local transform setters
//!
//! A [`Controller`] builds the panel from the host, forwards pointer input, and pushes offsets
//! and effect values back to the handles every tick.
//!
//! This crate is intentionally framework-agnostic (no engine bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod host;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use host::{InitMode, ItemHandle, ScrollHost};
