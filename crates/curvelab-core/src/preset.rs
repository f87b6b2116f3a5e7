//! Named timing-function presets with the standard CA/CSS control points.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::curve::TimingCurve;
use crate::error::CurveError;

/// The fixed set of named presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    Linear,
    EaseIn,
    EaseOut,
    EaseInEaseOut,
    /// The toolkit default pacing (0.25, 0.1, 0.25, 1).
    #[default]
    Default,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Linear,
        Preset::EaseIn,
        Preset::EaseOut,
        Preset::EaseInEaseOut,
        Preset::Default,
    ];

    /// The preset's control points as a curve value.
    pub const fn curve(self) -> TimingCurve {
        match self {
            Preset::Linear => TimingCurve::new(0.0, 0.0, 1.0, 1.0),
            Preset::EaseIn => TimingCurve::new(0.42, 0.0, 1.0, 1.0),
            Preset::EaseOut => TimingCurve::new(0.0, 0.0, 0.58, 1.0),
            Preset::EaseInEaseOut => TimingCurve::new(0.42, 0.0, 0.58, 1.0),
            Preset::Default => TimingCurve::new(0.25, 0.1, 0.25, 1.0),
        }
    }

    /// Canonical kebab-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Preset::Linear => "linear",
            Preset::EaseIn => "ease-in",
            Preset::EaseOut => "ease-out",
            Preset::EaseInEaseOut => "ease-in-ease-out",
            Preset::Default => "default",
        }
    }
}

impl FromStr for Preset {
    type Err = CurveError;

    /// Parse a preset name. Accepts the canonical kebab-case names and the
    /// camelCase spellings used by the native toolkit constants
    /// ("easeIn", "easeInEaseOut", ...), ASCII case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match folded.as_str() {
            "linear" => Ok(Preset::Linear),
            "easein" => Ok(Preset::EaseIn),
            "easeout" => Ok(Preset::EaseOut),
            "easeineaseout" | "easeinout" => Ok(Preset::EaseInEaseOut),
            "default" => Ok(Preset::Default),
            _ => Err(CurveError::UnknownPreset(s.to_string())),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
