//! Curvelab Editor (toolkit-agnostic)
//!
//! Shared-value model for interactive curve editing: one `CurveStore` owns
//! the current immutable `TimingCurve` snapshot and pushes every replacement
//! to all subscribed observers (graph, sliders, numeric label, preview).
//! Widgets never mutate the curve in place; they ask the store to publish a
//! new value.

pub mod handle;
pub mod store;

// Re-exports for consumers (adapters)
pub use handle::Handle;
pub use store::{CurveStore, SubscriberId};
