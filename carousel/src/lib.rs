//! A headless swipeable carousel engine.
//!
//! For adapter-level utilities (spring settling, indicator tweens, focus anchoring), see the
//! `carousel-adapter` crate.
//!
//! The engine turns a floating-point focal index plus a live drag offset into per-item
//! transforms (horizontal offset, scale, 3D tilt, stacking order), and resolves a gesture
//! release into at most one committed page step.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - the available width/height on each layout pass
//! - drag movement and drag end events
//! - the item count (the engine never sees the items themselves)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("carousel requires either the `std` or the `libm` feature");

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod config;
mod error;
mod gesture;
mod indicator;
mod layout;
mod state;
mod types;

#[doc(hidden)]
pub mod math;


pub use carousel::Carousel;
pub use config::CarouselConfig;
pub use error::ConfigError;
pub use gesture::{page_step, resolve_release};
pub use indicator::{Color, Dot, IndicatorLayout, IndicatorStyle, nearest_page, page_indicator};
pub use layout::{
    FOCAL_Z_ORDER, Layout, MIN_SPACING, ROTATION_REFERENCE_SIZE, SMALL_CARD_SIZE,
    compute_transforms, item_transform, sort_paint_order, z_order_for_distance,
};
pub use state::CarouselState;
pub use types::{DragRelease, Geometry, ItemTransform, PageStep, Phase, Release};
