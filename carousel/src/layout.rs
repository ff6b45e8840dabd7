use alloc::vec::Vec;

use crate::math;
use crate::{CarouselConfig, CarouselState, Geometry, ItemTransform};

/// Spacing never drops below this many pixels, however small the card.
pub const MIN_SPACING: f32 = 60.0;
/// Cards smaller than this get a gentler scale falloff and a stronger perspective.
pub const SMALL_CARD_SIZE: f32 = 180.0;
/// Card size at which the configured rotation angle applies in full.
pub const ROTATION_REFERENCE_SIZE: f32 = 200.0;
pub const FOCAL_Z_ORDER: f32 = 100.0;

pub(crate) const FOCAL_DISTANCE: f32 = 0.01;
const Z_ORDER_FALLOFF: f32 = 10.0;
const MAX_CORNER_RADIUS: f32 = 20.0;

/// Geometry-derived constants shared by every item of one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Side of the square card.
    pub card_size: f32,
    /// Horizontal distance between neighbouring items at rest.
    pub spacing: f32,
    pub center_x: f32,
    /// Lower bound for item scale.
    pub min_scale: f32,
    pub scale_reduction: f32,
    /// `min(1, card_size / 200)`.
    pub rotation_scale: f32,
    pub adjusted_rotation_degrees: f32,
    pub perspective: f32,
    pub corner_radius: f32,
    /// Top edge of the indicator row, measured from the top of the card strip:
    /// `card_size + indicator_spacing`.
    pub indicator_top: f32,
}

impl Layout {
    pub fn new(geometry: Geometry, config: &CarouselConfig) -> Self {
        let card_size = config.card_size(geometry.available_height);
        let small = card_size < SMALL_CARD_SIZE;
        let rotation_scale = (card_size / ROTATION_REFERENCE_SIZE).min(1.0);
        Self {
            card_size,
            spacing: (card_size * config.spacing_multiplier).max(MIN_SPACING),
            center_x: geometry.available_width / 2.0,
            min_scale: if small { 0.85 } else { 0.7 },
            scale_reduction: config.scale_reduction,
            rotation_scale,
            adjusted_rotation_degrees: config.rotation_angle_degrees * rotation_scale,
            perspective: if small { 0.3 } else { 0.2 },
            corner_radius: (card_size * 0.1).min(MAX_CORNER_RADIUS),
            indicator_top: card_size + config.indicator_spacing,
        }
    }

    /// Scale for an item `distance` card units away from the focal position.
    ///
    /// The falloff is linear inside the first card unit and flat beyond it.
    pub fn scale_for_distance(&self, distance: f32) -> f32 {
        let base = if distance < 1.0 {
            1.0 - distance * self.scale_reduction
        } else {
            1.0 - self.scale_reduction
        };
        base.max(self.min_scale)
    }

    /// Unsigned tilt for an item `distance` card units away.
    pub fn rotation_for_distance(&self, distance: f32) -> f32 {
        distance * self.adjusted_rotation_degrees
    }
}

/// Stacking order for an item `distance` card units away from the focal position.
pub fn z_order_for_distance(distance: f32) -> f32 {
    if distance < FOCAL_DISTANCE {
        FOCAL_Z_ORDER
    } else {
        FOCAL_Z_ORDER - distance * Z_ORDER_FALLOFF
    }
}

/// Computes the transform of item `index`.
pub fn item_transform(index: usize, state: &CarouselState, layout: &Layout) -> ItemTransform {
    let index_offset = index as f32 - state.current_index;
    let total_offset = index_offset * layout.spacing + state.drag_offset;
    let distance = math::abs(total_offset) / layout.card_size;
    let rotation = layout.rotation_for_distance(distance);

    ItemTransform {
        index,
        total_offset,
        distance,
        scale: layout.scale_for_distance(distance),
        rotation_degrees: if total_offset > 0.0 { -rotation } else { rotation },
        horizontal_offset: layout.center_x + total_offset - layout.card_size / 2.0,
        z_order: z_order_for_distance(distance),
        perspective: layout.perspective,
    }
}

/// Computes the transform of every item, in index order.
///
/// This is a pure function of its inputs: renderers call it on every state or geometry
/// change. Returns an empty vector when `count == 0`.
pub fn compute_transforms(
    state: &CarouselState,
    geometry: Geometry,
    config: &CarouselConfig,
    count: usize,
) -> Vec<ItemTransform> {
    let layout = Layout::new(geometry, config);
    (0..count)
        .map(|i| item_transform(i, state, &layout))
        .collect()
}

/// Sorts transforms back-to-front (ascending `z_order`, ties by index).
pub fn sort_paint_order(transforms: &mut [ItemTransform]) {
    transforms.sort_by(|a, b| {
        a.z_order
            .total_cmp(&b.z_order)
            .then_with(|| a.index.cmp(&b.index))
    });
}
