//! `f32` helpers that route through `std` when available and through `libm` otherwise.
//!
//! `core` does not provide transcendental functions, so `no_std` builds must enable the
//! `libm` feature.

#[cfg(feature = "std")]
#[inline]
pub fn abs(x: f32) -> f32 {
    x.abs()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn abs(x: f32) -> f32 {
    libm::fabsf(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn round(x: f32) -> f32 {
    x.round()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn round(x: f32) -> f32 {
    libm::roundf(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn sqrt(x: f32) -> f32 {
    x.sqrt()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn sqrt(x: f32) -> f32 {
    libm::sqrtf(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn exp(x: f32) -> f32 {
    x.exp()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn exp(x: f32) -> f32 {
    libm::expf(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn sin(x: f32) -> f32 {
    x.sin()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn sin(x: f32) -> f32 {
    libm::sinf(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn cos(x: f32) -> f32 {
    x.cos()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn cos(x: f32) -> f32 {
    libm::cosf(x)
}
