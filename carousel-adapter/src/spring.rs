use core::f32::consts::TAU;

use carousel::math;

/// Shortest accepted response, in seconds.
const MIN_RESPONSE: f32 = 0.001;
/// `damping_fraction` within this distance of 1 is treated as critically damped.
const CRITICAL_EPSILON: f32 = 1e-4;
/// Springs that have not settled after this many responses are considered done.
const MAX_SETTLE_RESPONSES: f32 = 20.0;

/// Spring parameters in response / damping-fraction form (unit mass).
///
/// - `response`: period of the undamped oscillation, in seconds.
/// - `damping_fraction`: `1.0` is critically damped, below bounces, above creeps.
///
/// The default (0.6 s, 0.8) settles a page change quickly with a barely visible overshoot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spring {
    pub response: f32,
    pub damping_fraction: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            response: 0.6,
            damping_fraction: 0.8,
        }
    }
}

impl Spring {
    pub fn new(response: f32, damping_fraction: f32) -> Self {
        Self {
            response: response.max(MIN_RESPONSE),
            damping_fraction: damping_fraction.max(0.0),
        }
    }

    pub fn critically_damped(response: f32) -> Self {
        Self::new(response, 1.0)
    }

    /// Undamped angular frequency `ω0 = 2π / response`.
    pub fn angular_frequency(&self) -> f32 {
        TAU / self.response.max(MIN_RESPONSE)
    }

    pub fn stiffness(&self) -> f32 {
        let w0 = self.angular_frequency();
        w0 * w0
    }

    pub fn damping(&self) -> f32 {
        2.0 * self.damping_fraction * self.angular_frequency()
    }

    /// Displacement and velocity `t` seconds after starting at displacement `x0` with
    /// velocity `v0`. The rest position is `0`.
    pub fn evaluate(&self, x0: f32, v0: f32, t: f32) -> (f32, f32) {
        let w0 = self.angular_frequency();
        let zeta = self.damping_fraction;

        if zeta < 1.0 - CRITICAL_EPSILON {
            let decay = zeta * w0;
            let wd = w0 * math::sqrt(1.0 - zeta * zeta);
            let a = x0;
            let b = (v0 + decay * x0) / wd;
            let e = math::exp(-decay * t);
            let (s, c) = (math::sin(wd * t), math::cos(wd * t));
            let x = e * (a * c + b * s);
            let v = e * ((b * wd - decay * a) * c - (a * wd + decay * b) * s);
            (x, v)
        } else if zeta > 1.0 + CRITICAL_EPSILON {
            let root = math::sqrt(zeta * zeta - 1.0);
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = (math::exp(r1 * t), math::exp(r2 * t));
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        } else {
            let c = v0 + w0 * x0;
            let e = math::exp(-w0 * t);
            ((x0 + c * t) * e, (c - w0 * (x0 + c * t)) * e)
        }
    }
}

/// An adapter-driven spring animation from `from` towards `to`.
///
/// Sampling is analytic, so frames may arrive at any rate without accumulating error.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringAnimation {
    pub from: f32,
    pub to: f32,
    /// Velocity at `start_ms`, in units per second.
    pub initial_velocity: f32,
    pub start_ms: u64,
    pub spring: Spring,
    /// Position tolerance for [`SpringAnimation::is_done`]. The velocity tolerance is ten
    /// times this, per second.
    pub rest_threshold: f32,
}

impl SpringAnimation {
    pub const DEFAULT_REST_THRESHOLD: f32 = 0.001;

    pub fn new(from: f32, to: f32, initial_velocity: f32, start_ms: u64, spring: Spring) -> Self {
        Self {
            from,
            to,
            initial_velocity,
            start_ms,
            spring,
            rest_threshold: Self::DEFAULT_REST_THRESHOLD,
        }
    }

    pub fn with_rest_threshold(mut self, rest_threshold: f32) -> Self {
        self.rest_threshold = rest_threshold.max(f32::EPSILON);
        self
    }

    fn elapsed_secs(&self, now_ms: u64) -> f32 {
        now_ms.saturating_sub(self.start_ms) as f32 / 1000.0
    }

    fn evaluate(&self, now_ms: u64) -> (f32, f32) {
        self.spring.evaluate(
            self.from - self.to,
            self.initial_velocity,
            self.elapsed_secs(now_ms),
        )
    }

    pub fn sample(&self, now_ms: u64) -> f32 {
        if self.is_done(now_ms) {
            return self.to;
        }
        self.to + self.evaluate(now_ms).0
    }

    pub fn velocity(&self, now_ms: u64) -> f32 {
        if self.is_done(now_ms) {
            return 0.0;
        }
        self.evaluate(now_ms).1
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        let t = self.elapsed_secs(now_ms);
        if t >= self.spring.response * MAX_SETTLE_RESPONSES {
            return true;
        }
        let (x, v) = self.evaluate(now_ms);
        math::abs(x) < self.rest_threshold && math::abs(v) < self.rest_threshold * 10.0
    }

    /// Redirects the animation to `new_to`, keeping the current position and velocity.
    pub fn retarget(&mut self, now_ms: u64, new_to: f32) {
        let from = self.sample(now_ms);
        let velocity = self.velocity(now_ms);
        *self = Self {
            from,
            to: new_to,
            initial_velocity: velocity,
            start_ms: now_ms,
            ..*self
        };
    }
}
