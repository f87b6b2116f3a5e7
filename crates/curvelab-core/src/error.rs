//! Error types shared across the curvelab crates.

use thiserror::Error;

/// Errors produced while constructing or evaluating a timing curve.
/// All failures are deterministic and reported immediately; nothing is
/// recovered silently.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Construction input was not exactly `[x1, y1, x2, y2]`.
    #[error("expected exactly 4 control-point scalars, got {count}")]
    InvalidControlPointCount { count: usize },

    /// Preset name did not match any known timing-function preset.
    #[error("unknown timing-function preset: {0:?}")]
    UnknownPreset(String),

    /// `evaluate` was given a parametric position outside [0, 1].
    #[error("parametric position {0} is outside [0, 1]")]
    OutOfRangeParameter(f32),

    /// A control-point scalar was NaN or infinite.
    #[error("control-point scalar {0} is not finite")]
    NonFiniteControlPoint(f32),

    /// Curve JSON did not parse or match any accepted shape.
    #[error("timing-curve json error: {0}")]
    Json(String),
}
