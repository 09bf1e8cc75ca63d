pub mod equipment;
pub mod fields;
pub mod kind;
pub mod observatory;
pub mod settings;

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use equipment::EquipmentProfile;
pub use kind::ProfileKind;
pub use observatory::{Location, ObservatoryProfile, Observer};
pub use settings::{FocusDirection, SettingsProfile};

/// A profile category persisted as one YAML document per name.
pub trait ProfileDocument: Serialize + DeserializeOwned + Default + Clone + Debug {
    const KIND: ProfileKind;
}
