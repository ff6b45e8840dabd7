/// Size of the area the carousel is laid out in, supplied on every layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub available_width: f32,
    pub available_height: f32,
}

impl Geometry {
    pub const fn new(available_width: f32, available_height: f32) -> Self {
        Self {
            available_width,
            available_height,
        }
    }
}

/// Visual parameters of one item, derived from its distance to the focal position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTransform {
    pub index: usize,
    /// Signed horizontal distance from the focal position, in pixels.
    pub total_offset: f32,
    /// `|total_offset| / card_size`.
    pub distance: f32,
    pub scale: f32,
    /// Tilt around the vertical axis. Negative for items right of centre.
    pub rotation_degrees: f32,
    /// Leading x of the card inside the available width.
    pub horizontal_offset: f32,
    /// Stacking order; higher draws on top.
    pub z_order: f32,
    /// Perspective depth factor for the tilt.
    pub perspective: f32,
}

impl ItemTransform {
    pub fn is_focal(&self) -> bool {
        self.distance < crate::layout::FOCAL_DISTANCE
    }
}

/// A gesture end event.
///
/// `predicted_translation` is where the platform expects the drag to come to rest if the
/// finger kept its momentum; the difference to `translation` is used as fling velocity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragRelease {
    pub translation: f32,
    pub predicted_translation: f32,
}

impl DragRelease {
    /// A release that neither moved nor flung. Used for cancelled gestures.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(translation: f32, predicted_translation: f32) -> Self {
        Self {
            translation,
            predicted_translation,
        }
    }

    pub fn velocity(&self) -> f32 {
        self.predicted_translation - self.translation
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
}

/// The page decision made when a drag ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageStep {
    /// Dragged (or flung) right: reveal the item on the left.
    Previous,
    /// Dragged (or flung) left: reveal the item on the right.
    Next,
    /// Snap back to the current item.
    Stay,
}

impl PageStep {
    /// Applies the step to `index`, clamped to `[0, count - 1]`.
    ///
    /// Always moves at most one page. With `count == 0` the result is `0`.
    pub fn apply(self, index: usize, count: usize) -> usize {
        let Some(last) = count.checked_sub(1) else {
            return 0;
        };
        let index = index.min(last);
        match self {
            Self::Previous => index.saturating_sub(1),
            Self::Next => index.saturating_add(1).min(last),
            Self::Stay => index,
        }
    }
}

/// Outcome of a release: the atomic transition a renderer should animate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Release {
    pub from_index: usize,
    pub to_index: usize,
    pub step: PageStep,
    /// The drag offset in effect right before it was reset to zero.
    pub released_offset: f32,
}

impl Release {
    pub fn changed_page(&self) -> bool {
        self.from_index != self.to_index
    }
}
