use alloc::vec::Vec;

use crate::gesture::page_step;
use crate::indicator::{IndicatorLayout, page_indicator};
use crate::layout::{Layout, item_transform, sort_paint_order};
use crate::{
    CarouselConfig, CarouselState, ConfigError, DragRelease, Geometry, ItemTransform, Phase,
    Release,
};

/// A headless carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or the items themselves, only their count.
/// - Your adapter drives it by providing geometry and gesture events.
/// - Rendering is exposed via [`Carousel::transforms`] and the zero-allocation
///   [`Carousel::for_each_transform`].
///
/// The engine's logical index is always a whole page. Settling animations are owned by the
/// rendering layer; see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    config: CarouselConfig,
    count: usize,
    geometry: Option<Geometry>,
    mounted: bool,

    current_index: usize,
    drag_offset: f32,
    phase: Phase,
}

impl Carousel {
    /// Creates an unmounted carousel over `count` items.
    ///
    /// The index is `0` until the first [`Carousel::set_geometry`] mounts it.
    pub fn new(config: CarouselConfig, count: usize) -> Result<Self, ConfigError> {
        config.validate()?;
        cdebug!(count, "Carousel::new");
        Ok(Self {
            config,
            count,
            geometry: None,
            mounted: false,
            current_index: 0,
            drag_offset: 0.0,
            phase: Phase::Idle,
        })
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Replaces the configuration. On error the previous configuration stays in effect.
    pub fn set_config(&mut self, config: CarouselConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        ctrace!("Carousel::set_config");
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Updates the item count, clamping the index into the new range.
    pub fn set_count(&mut self, count: usize) {
        if self.count == count {
            return;
        }
        ctrace!(from = self.count, to = count, "Carousel::set_count");
        self.count = count;
        self.current_index = self.clamp_index(self.current_index);
    }

    pub fn geometry(&self) -> Option<Geometry> {
        self.geometry
    }

    /// Records the geometry of the current layout pass.
    ///
    /// The first call mounts the carousel (see [`Carousel::mount`]).
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = Some(geometry);
        self.mount();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Focuses the middle item (`floor(count / 2)`) the first time it is called.
    ///
    /// With no items the index stays `0`. Later calls are no-ops.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.current_index = self.count / 2;
        cdebug!(
            count = self.count,
            index = self.current_index,
            "Carousel::mount"
        );
    }

    /// Layout constants for the last geometry, if any.
    pub fn layout(&self) -> Option<Layout> {
        self.geometry.map(|g| Layout::new(g, &self.config))
    }

    /// Spacing between items for the current layout.
    ///
    /// Before any geometry is known this is the spacing of a `min_height` card.
    pub fn spacing(&self) -> f32 {
        let geometry = self
            .geometry
            .unwrap_or(Geometry::new(0.0, self.config.min_height));
        Layout::new(geometry, &self.config).spacing
    }

    /// The focal index as a float, for consumers that interpolate.
    pub fn current_index(&self) -> f32 {
        self.current_index as f32
    }

    /// The focal index at rest.
    pub fn rest_index(&self) -> usize {
        self.current_index
    }

    /// The index the carousel is visually centred on while a drag is in flight.
    ///
    /// Equal to [`Carousel::current_index`] when no drag is active. Clamped to the item
    /// range.
    pub fn live_index(&self) -> f32 {
        let Some(last) = self.count.checked_sub(1) else {
            return 0.0;
        };
        let live = self.current_index as f32 - self.drag_offset / self.spacing();
        if live.is_nan() {
            return self.current_index as f32;
        }
        live.clamp(0.0, last as f32)
    }

    /// Sets the focal index, clamped to `[0, count - 1]`.
    ///
    /// Counts as mounting: a later first layout will not recentre the carousel.
    pub fn set_current_index(&mut self, index: usize) {
        let clamped = self.clamp_index(index);
        if clamped != index {
            cwarn!(
                index,
                count = self.count,
                "Carousel::set_current_index: out-of-range index clamped"
            );
        }
        self.mounted = true;
        self.current_index = clamped;
    }

    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    /// Idle -> Dragging.
    pub fn on_drag_start(&mut self) {
        if self.phase == Phase::Dragging {
            return;
        }
        ctrace!(index = self.current_index, "Carousel::on_drag_start");
        self.phase = Phase::Dragging;
    }

    /// Applies a drag movement. `translation` is the total horizontal translation since
    /// the gesture started, and becomes the drag offset verbatim.
    ///
    /// Starts a drag if none is in progress.
    pub fn on_drag_move(&mut self, translation: f32) {
        self.on_drag_start();
        self.drag_offset = if translation.is_finite() {
            translation
        } else {
            0.0
        };
    }

    /// Ends the gesture: pages at most one step and resets the drag offset.
    ///
    /// Index and offset change together; the returned [`Release`] describes the
    /// transition for animators.
    pub fn on_drag_end(&mut self, release: DragRelease) -> Release {
        let step = page_step(self.spacing(), &self.config, release);
        let from_index = self.current_index;
        let to_index = step.apply(from_index, self.count);
        let released_offset = self.drag_offset;

        self.current_index = to_index;
        self.drag_offset = 0.0;
        self.phase = Phase::Idle;

        cdebug!(
            from_index,
            to_index,
            translation = release.translation,
            velocity = release.velocity(),
            "Carousel::on_drag_end"
        );
        Release {
            from_index,
            to_index,
            step,
            released_offset,
        }
    }

    /// Cancels the gesture. Behaves like a release with no translation and no fling, so
    /// the carousel snaps back to its rest index.
    pub fn on_drag_cancel(&mut self) -> Release {
        ctrace!("Carousel::on_drag_cancel");
        self.on_drag_end(DragRelease::ZERO)
    }

    pub fn state(&self) -> CarouselState {
        CarouselState::new(self.current_index as f32, self.drag_offset)
    }

    /// Restores a snapshot. The index is rounded and clamped; a non-finite offset is
    /// dropped. Counts as mounting.
    pub fn restore_state(&mut self, state: CarouselState) {
        let index = crate::indicator::nearest_page(state.current_index, self.count).unwrap_or(0);
        self.mounted = true;
        self.current_index = index;
        self.drag_offset = if state.drag_offset.is_finite() {
            state.drag_offset
        } else {
            0.0
        };
        self.phase = if self.drag_offset == 0.0 {
            Phase::Idle
        } else {
            Phase::Dragging
        };
    }

    /// Transform of a single item, or `None` without geometry or for an out-of-range
    /// index.
    pub fn transform_for(&self, index: usize) -> Option<ItemTransform> {
        if index >= self.count {
            return None;
        }
        let layout = self.layout()?;
        Some(item_transform(index, &self.state(), &layout))
    }

    /// Transforms of every item in index order. Empty without geometry.
    pub fn transforms(&self) -> Vec<ItemTransform> {
        let mut out = Vec::with_capacity(self.count);
        self.for_each_transform(|t| out.push(t));
        out
    }

    pub fn for_each_transform(&self, mut f: impl FnMut(ItemTransform)) {
        let Some(layout) = self.layout() else {
            return;
        };
        let state = self.state();
        for i in 0..self.count {
            f(item_transform(i, &state, &layout));
        }
    }

    /// Transforms ordered back-to-front, so the focal item comes last.
    pub fn transforms_in_paint_order(&self) -> Vec<ItemTransform> {
        let mut out = self.transforms();
        sort_paint_order(&mut out);
        out
    }

    /// The page indicator for the rest index, or `None` when the configuration disables
    /// it.
    pub fn indicator(&self) -> Option<IndicatorLayout> {
        self.config
            .indicator_style
            .map(|style| page_indicator(self.current_index, self.count, &style))
    }

    fn clamp_index(&self, index: usize) -> usize {
        index.min(self.count.saturating_sub(1))
    }
}
