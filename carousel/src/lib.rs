//! A headless focus carousel engine.
//!
//! For adapter-level utilities (animated snapping, tweens), see the `carousel-adapter` crate.
//!
//! This crate covers the geometry of a horizontally scrolling image carousel: a single row of
//! square items with neighbors peeking on both sides, a center-focus scale falloff, nearest-item
//! snapping after a drag, and a page indicator kept in sync with the snapped item.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport bounds (width/height)
//! - scroll offsets as they change
//! - drag-end events with the platform's provisional resting offset
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod focus;
mod indicator;
mod layout;
mod math;
mod options;
mod snap;
mod state;
mod types;


pub use carousel::{Carousel, ItemView};
pub use focus::{
    FocusFrame, FocusScale, compute_focus, compute_focus_into, focus_scale, rendered_frame,
};
pub use indicator::{IndicatorPlacement, PageIndicator};
pub use layout::{ItemWidth, Layout};
pub use options::{CarouselOptions, OnPageChangeCallback};
pub use snap::{PageWidth, SnapOutcome, coarse_snap, compute_snap};
pub use state::{FrameState, ScrollState};
pub use types::{ContentMode, Rect, ScrollEvent, Size};
