//! Selected-handle state for an interactive curve control.

use serde::{Deserialize, Serialize};

/// Which control-point handle the user is currently manipulating.
/// Endpoints are fixed and never draggable, so only the two interior
/// points appear here.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Handle {
    #[default]
    None,
    PointA,
    PointB,
}

impl Handle {
    /// True when a draggable handle is selected.
    pub const fn is_selected(self) -> bool {
        !matches!(self, Handle::None)
    }
}
