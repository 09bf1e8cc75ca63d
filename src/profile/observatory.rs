use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::{ProfileDocument, ProfileKind};
use crate::error::{AppError, AppResult};

/// Where the telescope sits. Altitude is metres above sea level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObservatoryProfile {
    pub location: Location,
}

impl ProfileDocument for ObservatoryProfile {
    const KIND: ProfileKind = ProfileKind::Observatory;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub obsname: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
    pub timezone: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ObservatoryProfile {
    /// Observer built from the location, or `None` while any field is unset.
    pub fn observer(&self) -> AppResult<Option<Observer>> {
        let location = &self.location;
        let (Some(name), Some(latitude), Some(longitude), Some(elevation), Some(timezone)) = (
            location.obsname.as_ref(),
            location.latitude,
            location.longitude,
            location.altitude,
            location.timezone.as_ref(),
        ) else {
            return Ok(None);
        };

        Observer::new(name, latitude, longitude, elevation, timezone).map(Some)
    }

    pub fn set_observer(&mut self, observer: &Observer) {
        let location = &mut self.location;
        location.obsname = Some(observer.name.clone());
        location.latitude = Some(observer.latitude);
        location.longitude = Some(observer.longitude);
        location.altitude = Some(observer.elevation);
        location.timezone = Some(observer.timezone.clone());
    }
}

/// A point on Earth from which the sky is observed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observer {
    pub name: String,
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
    /// Metres.
    pub elevation: f64,
    pub timezone: String,
}

impl Observer {
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        timezone: impl Into<String>,
    ) -> AppResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::InvalidInput(format!(
                "latitude {latitude} is outside -90..=90 degrees"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::InvalidInput(format!(
                "longitude {longitude} is outside -180..=180 degrees"
            )));
        }
        if !elevation.is_finite() {
            return Err(AppError::InvalidInput(format!(
                "elevation {elevation} is not a finite number"
            )));
        }

        let timezone = timezone.into();
        if timezone.trim().is_empty() {
            return Err(AppError::InvalidInput("timezone must not be empty".to_string()));
        }

        Ok(Self {
            name: name.into(),
            latitude,
            longitude,
            elevation,
            timezone,
        })
    }
}

impl fmt::Display for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{}: {:.4}°{} {:.4}°{} {:.1} m ({})",
            self.name,
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew,
            self.elevation,
            self.timezone
        )
    }
}
