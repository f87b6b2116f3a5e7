//! Curvelab Core (engine-agnostic)
//!
//! Cubic-bezier timing-function model: four control-point scalars with fixed
//! endpoints (0,0)/(1,1), named presets, bezier-x inversion for evaluation,
//! and a flexible JSON loader. UI layers (graph, sliders, preview) consume
//! this crate through immutable `TimingCurve` snapshots.

pub mod curve;
pub mod error;
pub mod eval;
pub mod json;
pub mod preset;

// Re-exports for consumers (adapters)
pub use curve::{TimingCurve, Vec2};
pub use error::CurveError;
pub use json::{parse_timing_curve_json, timing_curve_to_json};
pub use preset::Preset;
