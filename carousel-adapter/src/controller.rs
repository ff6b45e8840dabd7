use alloc::vec::Vec;

use carousel::{
    Carousel, CarouselConfig, CarouselState, ConfigError, DragRelease, Geometry, IndicatorLayout,
    ItemTransform, Layout, Release, item_transform, nearest_page, sort_paint_order,
};

use crate::{
    FocusAnchor, IndicatorTransition, Spring, SpringAnimation, apply_focus_anchor,
    capture_focus_anchor,
};

/// Drag offsets within half a pixel of zero are at rest.
const OFFSET_REST_THRESHOLD: f32 = 0.5;

/// Which index drives the page indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorSource {
    /// The committed rest index. The highlight moves once per release.
    #[default]
    Rest,
    /// The displayed index, including in-flight drags and settling.
    Live,
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// The displayed (possibly fractional) state.
    pub state: CarouselState,
    /// `None` until the first geometry arrives.
    pub layout: Option<Layout>,
    /// Item transforms ordered back-to-front.
    pub transforms: Vec<ItemTransform>,
    /// `None` when the configuration disables the indicator.
    pub indicator: Option<IndicatorLayout>,
}

/// A framework-neutral controller that wraps a [`carousel::Carousel`] and animates its
/// discrete state changes with a spring.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_geometry` on every layout pass
/// - `on_drag_start` / `on_drag_move` / `on_drag_end` / `on_drag_cancel` for gestures
/// - `tick(now_ms)` each frame, then `frame(now_ms)` to render
///
/// The wrapped carousel always holds the final resolved index; the controller only
/// interpolates what is displayed towards it.
#[derive(Clone, Debug)]
pub struct Controller {
    carousel: Carousel,
    spring: Spring,
    index_spring: Option<SpringAnimation>,
    offset_spring: Option<SpringAnimation>,
    indicator_source: IndicatorSource,
    indicator: IndicatorTransition,
}

impl Controller {
    pub fn new(config: CarouselConfig, count: usize) -> Result<Self, ConfigError> {
        Ok(Self::from_carousel(Carousel::new(config, count)?))
    }

    pub fn from_carousel(carousel: Carousel) -> Self {
        let mut c = Self {
            carousel,
            spring: Spring::default(),
            index_spring: None,
            offset_spring: None,
            indicator_source: IndicatorSource::default(),
            indicator: IndicatorTransition::default(),
        };
        let page = c.indicator_target(0);
        c.indicator.jump_to_page(page);
        c
    }

    pub fn with_spring(mut self, spring: Spring) -> Self {
        self.spring = spring;
        self
    }

    pub fn with_indicator_source(mut self, source: IndicatorSource) -> Self {
        self.set_indicator_source(source);
        self
    }

    pub fn with_indicator_transition(mut self, transition: IndicatorTransition) -> Self {
        self.indicator = transition;
        self.reset_indicator();
        self
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Direct access to the engine. Changes made here are not animated; call
    /// [`Controller::cancel_animation`] afterwards if the index may have moved.
    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn into_carousel(self) -> Carousel {
        self.carousel
    }

    pub fn spring(&self) -> Spring {
        self.spring
    }

    /// Sets the spring used by animations started from now on.
    pub fn set_spring(&mut self, spring: Spring) {
        self.spring = spring;
    }

    pub fn indicator_source(&self) -> IndicatorSource {
        self.indicator_source
    }

    pub fn set_indicator_source(&mut self, source: IndicatorSource) {
        self.indicator_source = source;
        self.reset_indicator();
    }

    pub fn is_animating(&self) -> bool {
        self.index_spring.is_some() || self.offset_spring.is_some()
    }

    /// Whether the host should keep scheduling frames.
    pub fn needs_frame(&self, now_ms: u64) -> bool {
        self.is_animating() || self.indicator.is_animating(now_ms)
    }

    /// Stops all animations; the display jumps to the logical state.
    pub fn cancel_animation(&mut self) {
        self.index_spring = None;
        self.offset_spring = None;
        self.reset_indicator();
    }

    pub fn on_geometry(&mut self, geometry: Geometry) {
        let was_mounted = self.carousel.is_mounted();
        self.carousel.set_geometry(geometry);
        if !was_mounted {
            adebug!(
                index = self.carousel.rest_index(),
                count = self.carousel.count(),
                "Controller: mounted"
            );
            self.reset_indicator();
        }
    }

    pub fn on_drag_start(&mut self) {
        self.carousel.on_drag_start();
        self.offset_spring = None;
    }

    /// Applies a drag movement. The offset is displayed as-is; a running index animation
    /// keeps running underneath it.
    pub fn on_drag_move(&mut self, translation: f32, now_ms: u64) {
        self.offset_spring = None;
        self.carousel.on_drag_move(translation);
        self.sync_indicator(now_ms);
    }

    /// Resolves the release and starts settling from what is currently displayed.
    pub fn on_drag_end(&mut self, release: DragRelease, now_ms: u64) -> Release {
        let from = self.displayed_index(now_ms);
        let resolved = self.carousel.on_drag_end(release);
        self.settle(from, resolved, now_ms);
        resolved
    }

    pub fn on_drag_cancel(&mut self, now_ms: u64) -> Release {
        let from = self.displayed_index(now_ms);
        let resolved = self.carousel.on_drag_cancel();
        self.settle(from, resolved, now_ms);
        resolved
    }

    /// Animates to `index` (clamped). Returns the clamped index.
    pub fn scroll_to_index(&mut self, index: usize, now_ms: u64) -> usize {
        let from = self.displayed_index(now_ms);
        self.carousel.set_current_index(index);
        let to = self.carousel.rest_index();
        self.animate_index_to(from, to as f32, now_ms);
        self.sync_indicator(now_ms);
        to
    }

    /// Moves to `index` (clamped) without animation. Returns the clamped index.
    pub fn jump_to_index(&mut self, index: usize) -> usize {
        self.carousel.set_current_index(index);
        self.cancel_animation();
        self.carousel.rest_index()
    }

    /// Updates the item count; the display jumps to the clamped index.
    pub fn set_count(&mut self, count: usize) {
        adebug!(from = self.carousel.count(), to = count, "Controller::set_count");
        self.carousel.set_count(count);
        self.cancel_animation();
    }

    pub fn displayed_index(&self, now_ms: u64) -> f32 {
        match &self.index_spring {
            Some(anim) => anim.sample(now_ms),
            None => self.carousel.current_index(),
        }
    }

    pub fn displayed_offset(&self, now_ms: u64) -> f32 {
        if self.carousel.is_dragging() {
            return self.carousel.drag_offset();
        }
        match &self.offset_spring {
            Some(anim) => anim.sample(now_ms),
            None => self.carousel.drag_offset(),
        }
    }

    pub fn displayed_state(&self, now_ms: u64) -> CarouselState {
        CarouselState::new(self.displayed_index(now_ms), self.displayed_offset(now_ms))
    }

    /// Advances the controller.
    ///
    /// - While a spring is active, drops it once settled and returns the displayed index.
    /// - Otherwise returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        if self.index_spring.is_some_and(|a| a.is_done(now_ms)) {
            atrace!(now_ms, "Controller: index spring settled");
            self.index_spring = None;
        }
        if self.offset_spring.is_some_and(|a| a.is_done(now_ms)) {
            self.offset_spring = None;
        }
        self.sync_indicator(now_ms);
        self.indicator.tick(now_ms);

        if self.is_animating() {
            Some(self.displayed_index(now_ms))
        } else {
            None
        }
    }

    /// The page the indicator highlights at `now_ms`, per [`IndicatorSource`].
    pub fn indicator_page(&self, now_ms: u64) -> Option<usize> {
        self.indicator_target(now_ms)
    }

    /// The indicator row at `now_ms`, or `None` when the configuration disables it.
    pub fn indicator(&self, now_ms: u64) -> Option<IndicatorLayout> {
        self.carousel
            .config()
            .indicator_style
            .map(|style| self.indicator.layout(self.carousel.count(), &style, now_ms))
    }

    /// The displayed frame at `now_ms`.
    pub fn frame(&self, now_ms: u64) -> Frame {
        let state = self.displayed_state(now_ms);
        let layout = self.carousel.layout();
        let mut transforms = Vec::new();
        if let Some(layout) = &layout {
            transforms.extend((0..self.carousel.count()).map(|i| item_transform(i, &state, layout)));
            sort_paint_order(&mut transforms);
        }
        let indicator = self.indicator(now_ms);
        Frame {
            state,
            layout,
            transforms,
            indicator,
        }
    }

    pub fn capture_focus_anchor<K>(
        &self,
        key_for: impl FnOnce(usize) -> Option<K>,
    ) -> Option<FocusAnchor<K>> {
        capture_focus_anchor(&self.carousel, key_for)
    }

    /// Re-focuses the anchored item. This cancels any active animation.
    pub fn apply_focus_anchor<K>(
        &mut self,
        anchor: &FocusAnchor<K>,
        key_to_index: impl FnMut(&K) -> Option<usize>,
    ) -> bool {
        let applied = apply_focus_anchor(&mut self.carousel, anchor, key_to_index);
        self.cancel_animation();
        applied
    }

    /// `from` is the index displayed right before the engine resolved the release.
    fn settle(&mut self, from: f32, resolved: Release, now_ms: u64) {
        self.animate_index_to(from, resolved.to_index as f32, now_ms);
        self.offset_spring = (resolved.released_offset != 0.0).then(|| {
            SpringAnimation::new(resolved.released_offset, 0.0, 0.0, now_ms, self.spring)
                .with_rest_threshold(OFFSET_REST_THRESHOLD)
        });
        self.sync_indicator(now_ms);
    }

    /// Starts (or retargets) the index spring. `from` must be sampled before the engine
    /// moved to `to`; a running spring keeps its own position and velocity instead.
    fn animate_index_to(&mut self, from: f32, to: f32, now_ms: u64) {
        if let Some(anim) = self.index_spring.as_mut().filter(|a| !a.is_done(now_ms)) {
            atrace!(from = anim.to, to, now_ms, "Controller: retarget index spring");
            anim.retarget(now_ms, to);
            return;
        }
        self.index_spring = (from != to).then(|| {
            atrace!(from, to, now_ms, "Controller: start index spring");
            SpringAnimation::new(from, to, 0.0, now_ms, self.spring)
        });
    }

    fn indicator_target(&self, now_ms: u64) -> Option<usize> {
        let count = self.carousel.count();
        match self.indicator_source {
            IndicatorSource::Rest => nearest_page(self.carousel.current_index(), count),
            IndicatorSource::Live => {
                let state = self.displayed_state(now_ms);
                let live = state.current_index - state.drag_offset / self.carousel.spacing();
                nearest_page(live, count)
            }
        }
    }

    fn reset_indicator(&mut self) {
        let page = self.indicator_target(0);
        self.indicator.jump_to_page(page);
    }

    fn sync_indicator(&mut self, now_ms: u64) {
        let page = self.indicator_target(now_ms);
        self.indicator.set_page(page, now_ms);
    }
}
