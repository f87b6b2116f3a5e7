//! The TimingCurve value type and its control-point accessors.
//! Preset literals live in preset.rs; evaluation lives in eval.rs.

use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::preset::Preset;

/// 2D point in the normalized 0..1 curve domain.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A cubic-bezier timing function: maps elapsed-time fraction to
/// animation-progress fraction.
///
/// Only the two interior control points are stored; the endpoints are fixed
/// at (0,0) and (1,1) and never mutated. The type is an immutable value:
/// "editing" a curve means constructing a new instance (`with_point_a`,
/// `with_point_b`), so observers holding an earlier snapshot keep it intact.
///
/// Scalars are conventionally in [0,1] for visual editing but are not
/// clamped; y-overshoot is a legitimate timing function. They must be finite.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TimingCurve {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl TimingCurve {
    /// Build a curve from the four control scalars without validation.
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Build a curve from a flat ordered sequence `[x1, y1, x2, y2]`.
    ///
    /// Errors with `InvalidControlPointCount` when the slice length is not
    /// exactly 4, and `NonFiniteControlPoint` on NaN/infinite scalars.
    pub fn from_scalars(scalars: &[f32]) -> Result<Self, CurveError> {
        match scalars {
            [x1, y1, x2, y2] => {
                for &v in scalars {
                    if !v.is_finite() {
                        return Err(CurveError::NonFiniteControlPoint(v));
                    }
                }
                Ok(Self::new(*x1, *y1, *x2, *y2))
            }
            _ => Err(CurveError::InvalidControlPointCount {
                count: scalars.len(),
            }),
        }
    }

    /// Build a curve from the two interior control points.
    pub fn from_points(a: Vec2, b: Vec2) -> Result<Self, CurveError> {
        Self::from_scalars(&[a.x, a.y, b.x, b.y])
    }

    /// Build a curve from a named preset.
    pub const fn from_preset(preset: Preset) -> Self {
        preset.curve()
    }

    /// Build a curve from a preset name such as `"ease-in"`.
    ///
    /// Errors with `UnknownPreset` for unrecognized names.
    pub fn from_preset_name(name: &str) -> Result<Self, CurveError> {
        name.parse::<Preset>().map(Self::from_preset)
    }

    /// The flat ordered control-point sequence `[x1, y1, x2, y2]`.
    ///
    /// Round-trip law: `TimingCurve::from_scalars(&c.control_points())`
    /// reconstructs `c` exactly.
    pub const fn control_points(&self) -> [f32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// First interior control point (departure from (0,0)).
    pub const fn point_a(&self) -> Vec2 {
        Vec2 {
            x: self.x1,
            y: self.y1,
        }
    }

    /// Second interior control point (arrival at (1,1)).
    pub const fn point_b(&self) -> Vec2 {
        Vec2 {
            x: self.x2,
            y: self.y2,
        }
    }

    /// New curve with the first control point replaced.
    pub const fn with_point_a(&self, a: Vec2) -> Self {
        Self::new(a.x, a.y, self.x2, self.y2)
    }

    /// New curve with the second control point replaced.
    pub const fn with_point_b(&self, b: Vec2) -> Self {
        Self::new(self.x1, self.y1, b.x, b.y)
    }
}

impl Default for TimingCurve {
    /// The system default timing function (0.25, 0.1, 0.25, 1).
    fn default() -> Self {
        Self::from_preset(Preset::Default)
    }
}

impl std::fmt::Display for TimingCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.x1, self.y1, self.x2, self.y2)
    }
}
