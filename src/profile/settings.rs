use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::{ProfileDocument, ProfileKind};

/// Program settings shared by the imaging tools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsProfile {
    pub platesolve: PlateSolve,
    pub autofocus: AutoFocus,
}

impl ProfileDocument for SettingsProfile {
    const KIND: ProfileKind = ProfileKind::Settings;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateSolve {
    /// Arcseconds per pixel.
    pub pixelscale: f64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for PlateSolve {
    fn default() -> Self {
        Self {
            pixelscale: 5.7,
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusDirection {
    #[default]
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
}

impl fmt::Display for FocusDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusDirection::In => f.write_str("IN"),
            FocusDirection::Out => f.write_str("OUT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoFocus {
    pub start_hfr: f64,
    pub near_hfr: f64,
    /// Seconds to settle after each focuser move.
    pub focus_delay: f64,
    pub focus_dir: FocusDirection,
    pub exposure_start: f64,
    pub exposure_max: f64,
    pub exposure_min: f64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for AutoFocus {
    fn default() -> Self {
        Self {
            start_hfr: 25.0,
            near_hfr: 12.0,
            focus_delay: 0.0,
            focus_dir: FocusDirection::In,
            exposure_start: 1.0,
            exposure_max: 8.0,
            exposure_min: 0.5,
            extra: BTreeMap::new(),
        }
    }
}
