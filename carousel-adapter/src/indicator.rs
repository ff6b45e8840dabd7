use carousel::{IndicatorLayout, IndicatorStyle, page_indicator};

use crate::{Easing, Tween};

pub const DEFAULT_INDICATOR_DURATION_MS: u64 = 200;

/// Cross-fades the highlight between indicator dots when the active page changes.
///
/// The newly active dot grows from `inactive_scale` to 1 while the previous one shrinks
/// back, both over the same tween.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorTransition {
    current: Option<usize>,
    previous: Option<usize>,
    tween: Option<Tween>,
    duration_ms: u64,
    easing: Easing,
}

impl Default for IndicatorTransition {
    fn default() -> Self {
        Self::new(DEFAULT_INDICATOR_DURATION_MS, Easing::EaseInOutCubic)
    }
}

impl IndicatorTransition {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            current: None,
            previous: None,
            tween: None,
            duration_ms,
            easing,
        }
    }

    pub fn current_page(&self) -> Option<usize> {
        self.current
    }

    /// Switches the highlight to `page`, starting a transition if it changed.
    pub fn set_page(&mut self, page: Option<usize>, now_ms: u64) {
        if self.current == page {
            return;
        }
        self.previous = self.current;
        self.current = page;
        self.tween = Some(Tween::new(
            0.0,
            1.0,
            now_ms,
            self.duration_ms,
            self.easing,
        ));
    }

    /// Switches the highlight without a transition.
    pub fn jump_to_page(&mut self, page: Option<usize>) {
        self.current = page;
        self.previous = None;
        self.tween = None;
    }

    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.tween.is_some_and(|t| !t.is_done(now_ms))
    }

    /// Drops a finished transition.
    pub fn tick(&mut self, now_ms: u64) {
        if self.tween.is_some_and(|t| t.is_done(now_ms)) {
            self.tween = None;
            self.previous = None;
        }
    }

    /// The indicator row as it should be drawn at `now_ms`.
    pub fn layout(&self, total_pages: usize, style: &IndicatorStyle, now_ms: u64) -> IndicatorLayout {
        let current = self.current.unwrap_or(total_pages);
        let mut layout = page_indicator(current, total_pages, style);

        let Some(tween) = self.tween.filter(|t| !t.is_done(now_ms)) else {
            return layout;
        };
        let t = tween.progress(now_ms);

        for dot in &mut layout.dots {
            if Some(dot.index) == self.current {
                dot.scale = style.inactive_scale + (1.0 - style.inactive_scale) * t;
                dot.color = style.inactive_color.lerp(style.active_color, t);
            } else if Some(dot.index) == self.previous {
                dot.scale = 1.0 + (style.inactive_scale - 1.0) * t;
                dot.color = style.active_color.lerp(style.inactive_color, t);
            }
        }
        layout
    }
}
