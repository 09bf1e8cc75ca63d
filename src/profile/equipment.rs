use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::{ProfileDocument, ProfileKind};

pub const NOT_SET: &str = "Not Set";

fn not_set() -> String {
    NOT_SET.to_string()
}

fn is_unset(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case(NOT_SET)
}

/// Hardware attached to one imaging rig.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EquipmentProfile {
    pub backend: Backend,
    pub focuser: Focuser,
    pub camera: Camera,
    pub mount: Mount,
    pub filterwheel: FilterWheel,
    pub telescope: Telescope,
}

impl ProfileDocument for EquipmentProfile {
    const KIND: ProfileKind = ProfileKind::Equipment;
}

impl EquipmentProfile {
    /// Backend a device should use: its own when set, otherwise the rig-wide one.
    pub fn effective_backend<'a>(&'a self, device_backend: &'a str) -> Option<&'a str> {
        if !is_unset(device_backend) {
            return Some(device_backend);
        }
        if !is_unset(&self.backend.name) {
            return Some(&self.backend.name);
        }
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Backend {
    pub name: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for Backend {
    fn default() -> Self {
        Self {
            name: not_set(),
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Focuser {
    pub backend: String,
    pub driver: String,
    pub minpos: i64,
    pub maxpos: i64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for Focuser {
    fn default() -> Self {
        Self {
            backend: not_set(),
            driver: not_set(),
            minpos: 0,
            maxpos: 0,
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    pub backend: String,
    pub driver: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            backend: not_set(),
            driver: not_set(),
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mount {
    pub backend: String,
    pub driver: String,
    /// Hint for how the driver reports pier side.
    pub pierside_reporting: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for Mount {
    fn default() -> Self {
        Self {
            backend: not_set(),
            driver: not_set(),
            pierside_reporting: "Not set".to_string(),
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterWheel {
    pub backend: String,
    pub driver: String,
    pub names: Vec<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for FilterWheel {
    fn default() -> Self {
        Self {
            backend: not_set(),
            driver: not_set(),
            names: Vec::new(),
            extra: BTreeMap::new(),
        }
    }
}

impl FilterWheel {
    pub fn num_filters(&self) -> usize {
        self.names.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Telescope {
    /// Millimetres.
    pub focal_length: f64,
    /// Millimetres.
    pub aperture: f64,
    /// Central obstruction as a fraction of the aperture.
    pub obstruction: f64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
