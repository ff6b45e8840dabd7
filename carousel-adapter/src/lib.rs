//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Spring settling after a release (the engine only emits the target state)
//! - Tween-driven page indicator transitions
//! - Focus anchoring when the item collection changes
//! - A `Controller` and `CarouselView` that tie these together
//!
//! This crate is intentionally framework-agnostic (no egui/iced bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod indicator;
mod key;
mod spring;
mod tween;
mod view;

#[cfg(test)]
mod tests;

pub use anchor::{FocusAnchor, apply_focus_anchor, capture_focus_anchor};
pub use controller::{Controller, Frame, IndicatorSource};
pub use indicator::{DEFAULT_INDICATOR_DURATION_MS, IndicatorTransition};
pub use key::CarouselKey;
pub use spring::{Spring, SpringAnimation};
pub use tween::{Easing, Tween};
pub use view::{CarouselView, RenderedItem};
