//! Easing functions for timed transitions.

/// Easing curves used by overlay and control transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material standard curve for on-screen movement.
    FastOutSlowIn,
    /// Material incoming (decelerate) curve.
    LinearOutSlowIn,
    /// Material outgoing (accelerate) curve.
    FastOutLinearIn,
}

impl Easing {
    /// Transforms a linear fraction in `[0, 1]`.
    pub fn transform(self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction,
            Easing::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0).transform(fraction),
            Easing::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0).transform(fraction),
            Easing::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0).transform(fraction),
            Easing::FastOutSlowIn => CubicBezier::new(0.4, 0.0, 0.2, 1.0).transform(fraction),
            Easing::LinearOutSlowIn => CubicBezier::new(0.0, 0.0, 0.2, 1.0).transform(fraction),
            Easing::FastOutLinearIn => CubicBezier::new(0.4, 0.0, 1.0, 1.0).transform(fraction),
        }
    }
}

/// CSS-style cubic bezier timing curve through (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    ax: f32,
    bx: f32,
    cx: f32,
    ay: f32,
    by: f32,
    cy: f32,
}

impl CubicBezier {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let ax = 1.0 - cx - bx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        let ay = 1.0 - cy - by;
        Self {
            ax,
            bx,
            cx,
            ay,
            by,
            cy,
        }
    }

    /// Evaluates the curve's y for the given x fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        let t = self.solve_for_t(fraction);
        sample(self.ay, self.by, self.cy, t)
    }

    /// Newton-Raphson on the x polynomial, falling back to bisection when
    /// the derivative degenerates or the iteration fails to converge.
    fn solve_for_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..8 {
            let error = sample(self.ax, self.bx, self.cx, t) - x;
            if error.abs() < 1e-6 {
                return t;
            }
            let slope = derivative(self.ax, self.bx, self.cx, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        let mut lo = 0.0f32;
        let mut hi = 1.0f32;
        t = x;
        for _ in 0..16 {
            let delta = sample(self.ax, self.bx, self.cx, t) - x;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
        t
    }
}

#[inline]
fn sample(a: f32, b: f32, c: f32, t: f32) -> f32 {
    ((a * t + b) * t + c) * t
}

#[inline]
fn derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
    (3.0 * a * t + 2.0 * b) * t + c
}
