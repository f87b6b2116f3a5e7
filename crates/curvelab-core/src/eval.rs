//! Curve evaluation: bezier-x inversion so callers can ask "progress at
//! elapsed-time fraction t" rather than sampling by raw bezier parameter.
//!
//! Inversion runs Newton-Raphson on x(s) - t and falls back to bisection
//! when the x-derivative degenerates. For x1/x2 in [0,1] x(s) is monotonic
//! and the solve converges well inside the tolerance below.

use crate::curve::{TimingCurve, Vec2};
use crate::error::CurveError;

const NEWTON_ITERATIONS: usize = 8;
const BISECT_ITERATIONS: usize = 24;
const X_TOLERANCE: f32 = 1e-6;
const DERIVATIVE_EPS: f32 = 1e-6;

/// Cubic Bezier basis function.
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

#[inline]
fn cubic_bezier_derivative(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * (p1 - p0) + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// Solve x(s) = x for the bezier parameter s in [0,1].
#[inline]
fn solve_curve_x(x: f32, x1: f32, x2: f32) -> f32 {
    // Newton-Raphson first: converges in a few steps for well-behaved curves.
    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = cubic_bezier(0.0, x1, x2, 1.0, s) - x;
        if err.abs() < X_TOLERANCE {
            return s;
        }
        let d = cubic_bezier_derivative(0.0, x1, x2, 1.0, s);
        if d.abs() < DERIVATIVE_EPS {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }

    // Bisection fallback for flat spots.
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = s.clamp(0.0, 1.0);
    for _ in 0..BISECT_ITERATIONS {
        let xs = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (xs - x).abs() < X_TOLERANCE {
            break;
        }
        if xs < x {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    mid
}

impl TimingCurve {
    #[inline]
    fn is_linear(&self) -> bool {
        self.x1 == 0.0 && self.y1 == 0.0 && self.x2 == 1.0 && self.y2 == 1.0
    }

    fn check_parameter(t: f32) -> Result<(), CurveError> {
        if !t.is_finite() || !(0.0..=1.0).contains(&t) {
            return Err(CurveError::OutOfRangeParameter(t));
        }
        Ok(())
    }

    /// Progress value y at elapsed-time fraction `t` in [0,1].
    ///
    /// Endpoints are exact: `evaluate(0) == 0` and `evaluate(1) == 1`.
    /// Errors with `OutOfRangeParameter` outside [0,1] (NaN included).
    pub fn evaluate(&self, t: f32) -> Result<f32, CurveError> {
        Self::check_parameter(t)?;
        if t == 0.0 || t == 1.0 {
            return Ok(t);
        }
        // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
        if self.is_linear() {
            return Ok(t);
        }
        let s = solve_curve_x(t, self.x1, self.x2);
        Ok(cubic_bezier(0.0, self.y1, self.y2, 1.0, s))
    }

    /// Progress value plus the slope dy/dx at the solved parameter.
    pub fn evaluate_with_derivative(&self, t: f32) -> Result<(f32, f32), CurveError> {
        Self::check_parameter(t)?;
        if self.is_linear() {
            return Ok((t, 1.0));
        }
        let s = solve_curve_x(t, self.x1, self.x2);
        let eased = cubic_bezier(0.0, self.y1, self.y2, 1.0, s);
        let dx_ds = cubic_bezier_derivative(0.0, self.x1, self.x2, 1.0, s);
        let dy_ds = cubic_bezier_derivative(0.0, self.y1, self.y2, 1.0, s);
        let deriv = if dx_ds.abs() > DERIVATIVE_EPS {
            dy_ds / dx_ds
        } else {
            0.0
        };
        Ok((eased, deriv))
    }

    /// Polyline of the curve: `n + 1` points (x(s), y(s)) at uniform bezier
    /// parameters, endpoints included. Intended for graph rendering; sampling
    /// by parameter avoids the x-inversion per point.
    pub fn samples(&self, n: usize) -> Vec<Vec2> {
        let n = n.max(1);
        let mut points = Vec::with_capacity(n + 1);
        for i in 0..=n {
            let s = i as f32 / n as f32;
            points.push(Vec2 {
                x: cubic_bezier(0.0, self.x1, self.x2, 1.0, s),
                y: cubic_bezier(0.0, self.y1, self.y2, 1.0, s),
            });
        }
        points
    }
}
