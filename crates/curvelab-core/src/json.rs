//! Flexible JSON loader for timing curves.
//!
//! Accepted shapes, all normalized to the same `TimingCurve`:
//! - bare control-point array: `[0.42, 0, 1, 1]`
//! - named preset object: `{ "name": "ease-in" }`
//! - explicit object: `{ "x1": 0.42, "y1": 0, "x2": 1, "y2": 1 }`
//!
//! The canonical serialized form is the flat 4-array.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::curve::TimingCurve;
use crate::error::CurveError;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCurve {
    Scalars(Vec<f64>),
    Named { name: String },
    Points { x1: f64, y1: f64, x2: f64, y2: f64 },
}

/// Parse timing-curve JSON in any accepted shape.
pub fn parse_timing_curve_json(s: &str) -> Result<TimingCurve, CurveError> {
    let raw: RawCurve =
        serde_json::from_str(s).map_err(|e| CurveError::Json(format!("parse error: {e}")))?;
    match raw {
        RawCurve::Scalars(v) => {
            let scalars: Vec<f32> = v.iter().map(|&x| x as f32).collect();
            TimingCurve::from_scalars(&scalars)
        }
        RawCurve::Named { name } => TimingCurve::from_preset_name(&name),
        RawCurve::Points { x1, y1, x2, y2 } => {
            TimingCurve::from_scalars(&[x1 as f32, y1 as f32, x2 as f32, y2 as f32])
        }
    }
}

/// Serialize a curve into the canonical flat 4-array form.
pub fn timing_curve_to_json(curve: &TimingCurve) -> JsonValue {
    JsonValue::from(curve.control_points().to_vec())
}
