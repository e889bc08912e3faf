//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the core geometry and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A `Controller` that turns drag-end snaps into frame-driven scroll animations
//! - Tween and easing helpers for those animations
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use tween::{Easing, Tween};
