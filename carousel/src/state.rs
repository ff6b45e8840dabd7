/// A lightweight, serializable snapshot of the carousel's logical state.
///
/// `current_index` is integral for snapshots taken from [`crate::Carousel`]. Animators may
/// build snapshots with fractional indexes to render in-between frames.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub current_index: f32,
    /// Live horizontal drag translation in pixels. Zero at rest.
    pub drag_offset: f32,
}

impl CarouselState {
    pub const fn new(current_index: f32, drag_offset: f32) -> Self {
        Self {
            current_index,
            drag_offset,
        }
    }

    /// A state with no drag in progress.
    pub const fn at_rest(current_index: f32) -> Self {
        Self::new(current_index, 0.0)
    }

    /// Whether this is a settle state: no drag and an integral index.
    pub fn is_at_rest(&self) -> bool {
        self.drag_offset == 0.0 && crate::math::round(self.current_index) == self.current_index
    }
}
