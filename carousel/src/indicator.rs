use alloc::vec::Vec;

use crate::ConfigError;
use crate::error::check_non_negative;
use crate::math;

/// Straight (non-premultiplied) RGBA colour with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const GRAY: Self = Self::rgb(0.557, 0.557, 0.576);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Multiplies the alpha channel by `opacity`.
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self {
            a: self.a * opacity.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Component-wise linear interpolation; `t` is clamped to `0.0..=1.0`.
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (to.r - self.r) * t,
            g: self.g + (to.g - self.g) * t,
            b: self.b + (to.b - self.b) * t,
            a: self.a + (to.a - self.a) * t,
        }
    }
}

/// Appearance of the page indicator row.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorStyle {
    pub active_color: Color,
    pub inactive_color: Color,
    /// Diameter of a dot at scale 1.
    pub active_size: f32,
    /// Scale applied to inactive dots.
    pub inactive_scale: f32,
    /// Gap between neighbouring dots.
    pub spacing: f32,
    pub horizontal_padding: f32,
    pub vertical_padding: f32,
    /// Extra space a host may reserve above the row. Host-only: no layout output
    /// includes it, and the row's `height` covers only the vertical padding and dots.
    pub top_padding: f32,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            active_color: Color::GRAY,
            inactive_color: Color::GRAY.with_opacity(0.5),
            active_size: 10.0,
            inactive_scale: 0.8,
            spacing: 8.0,
            horizontal_padding: 12.0,
            vertical_padding: 8.0,
            top_padding: 16.0,
        }
    }
}

impl IndicatorStyle {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("indicator_style.active_size", self.active_size)?;
        check_non_negative("indicator_style.inactive_scale", self.inactive_scale)?;
        check_non_negative("indicator_style.spacing", self.spacing)?;
        check_non_negative(
            "indicator_style.horizontal_padding",
            self.horizontal_padding,
        )?;
        check_non_negative("indicator_style.vertical_padding", self.vertical_padding)?;
        check_non_negative("indicator_style.top_padding", self.top_padding)?;
        Ok(())
    }

    /// Centre x of dot `index`, relative to the row's leading edge (padding included).
    pub fn dot_center_x(&self, index: usize) -> f32 {
        self.horizontal_padding
            + self.active_size / 2.0
            + index as f32 * (self.active_size + self.spacing)
    }
}

/// One dot of the page indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dot {
    pub index: usize,
    pub is_active: bool,
    pub color: Color,
    /// Scale applied to `active_size` (1 for the active dot).
    pub scale: f32,
    /// Centre x relative to the row's leading edge.
    pub center_x: f32,
}

impl Dot {
    pub fn diameter(&self, style: &IndicatorStyle) -> f32 {
        style.active_size * self.scale
    }
}

/// The laid-out indicator row.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorLayout {
    pub dots: Vec<Dot>,
    pub active: Option<usize>,
    /// Row width including horizontal padding. Zero when there are no pages.
    pub width: f32,
    /// Row height including vertical padding. Zero when there are no pages.
    pub height: f32,
}

impl IndicatorLayout {
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }
}

/// Lays out `total_pages` dots with `current_page` highlighted.
///
/// Dot sizes do not affect layout: every dot occupies `active_size`, inactive dots are
/// drawn scaled down inside that slot. A `current_page` outside `0..total_pages` leaves
/// every dot inactive.
pub fn page_indicator(
    current_page: usize,
    total_pages: usize,
    style: &IndicatorStyle,
) -> IndicatorLayout {
    if total_pages == 0 {
        return IndicatorLayout::default();
    }

    let dots = (0..total_pages)
        .map(|index| {
            let is_active = index == current_page;
            Dot {
                index,
                is_active,
                color: if is_active {
                    style.active_color
                } else {
                    style.inactive_color
                },
                scale: if is_active { 1.0 } else { style.inactive_scale },
                center_x: style.dot_center_x(index),
            }
        })
        .collect();

    let n = total_pages as f32;
    IndicatorLayout {
        dots,
        active: (current_page < total_pages).then_some(current_page),
        width: style.horizontal_padding * 2.0 + n * style.active_size + (n - 1.0) * style.spacing,
        height: style.vertical_padding * 2.0 + style.active_size,
    }
}

/// Rounds a (possibly fractional) carousel index to the nearest page.
///
/// Returns `None` when there are no pages. NaN maps to page 0.
pub fn nearest_page(index: f32, total_pages: usize) -> Option<usize> {
    if total_pages == 0 {
        return None;
    }
    if index.is_nan() || index <= 0.0 {
        return Some(0);
    }
    let rounded = math::round(index);
    let last = total_pages - 1;
    if rounded >= last as f32 {
        Some(last)
    } else {
        Some(rounded as usize)
    }
}
