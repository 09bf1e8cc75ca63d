//! Dotted `section.field` access to a profile's document form.

use serde_yaml::Value;

use super::ProfileDocument;
use crate::error::{AppError, AppResult};

fn split_key(key: &str) -> AppResult<(&str, &str)> {
    match key.trim().split_once('.') {
        Some((section, field))
            if !section.is_empty() && !field.is_empty() && !field.contains('.') =>
        {
            Ok((section, field))
        }
        _ => Err(AppError::InvalidInput(format!(
            "key `{key}` must have the form section.field"
        ))),
    }
}

pub fn get<P: ProfileDocument>(profile: &P, key: &str) -> AppResult<Value> {
    let (section, field) = split_key(key)?;
    let document = serde_yaml::to_value(profile)?;

    document
        .get(section)
        .and_then(|values| values.get(field))
        .cloned()
        .ok_or_else(|| AppError::InvalidInput(format!("unknown {} key `{key}`", P::KIND)))
}

/// Replaces one field with `raw` parsed as YAML. The result must still read back as `P`.
pub fn set<P: ProfileDocument>(profile: &P, key: &str, raw: &str) -> AppResult<P> {
    let (section, field) = split_key(key)?;
    let mut document = serde_yaml::to_value(profile)?;

    let slot = document
        .get_mut(section)
        .and_then(|values| values.get_mut(field))
        .ok_or_else(|| AppError::InvalidInput(format!("unknown {} key `{key}`", P::KIND)))?;

    let parsed = parse_scalar(raw)?;
    let retry_as_text = matches!(parsed, Value::Bool(_) | Value::Number(_));
    *slot = parsed;

    match serde_yaml::from_value::<P>(document.clone()) {
        Ok(updated) => Ok(updated),
        // `driver: 123` is a string field holding digits
        Err(_) if retry_as_text => {
            if let Some(slot) = document.get_mut(section).and_then(|values| values.get_mut(field)) {
                *slot = Value::String(raw.trim().to_string());
            }
            serde_yaml::from_value(document).map_err(|err| mismatch(raw, key, err))
        }
        Err(err) => Err(mismatch(raw, key, err)),
    }
}

fn mismatch(raw: &str, key: &str, err: serde_yaml::Error) -> AppError {
    AppError::InvalidInput(format!("value `{raw}` does not fit `{key}`: {err}"))
}

fn parse_scalar(raw: &str) -> AppResult<Value> {
    if raw.trim().is_empty() {
        return Ok(Value::String(String::new()));
    }
    serde_yaml::from_str(raw)
        .map_err(|err| AppError::InvalidInput(format!("cannot parse value `{raw}`: {err}")))
}

/// One-line rendering used by text output.
pub fn render(value: &Value) -> AppResult<String> {
    match value {
        Value::Null => Ok("null".to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Number(number) => Ok(number.to_string()),
        Value::String(text) => Ok(text.clone()),
        other => Ok(serde_json::to_string(other)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{EquipmentProfile, ObservatoryProfile, SettingsProfile};

    #[test]
    fn reads_a_nested_field() {
        let profile = EquipmentProfile::default();
        let value = get(&profile, "camera.driver").expect("get");
        assert_eq!(value, Value::String("Not Set".to_string()));
    }

    #[test]
    fn sets_typed_values() {
        let profile = EquipmentProfile::default();
        let profile = set(&profile, "focuser.maxpos", "12000").expect("set");
        assert_eq!(profile.focuser.maxpos, 12000);

        let profile = set(&profile, "filterwheel.names", "[L, R, G, B]").expect("set");
        assert_eq!(profile.filterwheel.num_filters(), 4);

        let profile = set(&profile, "camera.driver", "CCD Simulator").expect("set");
        assert_eq!(profile.camera.driver, "CCD Simulator");

        let profile = set(&profile, "mount.driver", "1200").expect("numeric text");
        assert_eq!(profile.mount.driver, "1200");
    }

    #[test]
    fn optional_location_fields_accept_values() {
        let profile =
            set(&ObservatoryProfile::default(), "location.latitude", "35.8").expect("set");
        assert_eq!(profile.location.latitude, Some(35.8));

        let profile = set(&profile, "location.latitude", "null").expect("clear");
        assert_eq!(profile.location.latitude, None);
    }

    #[test]
    fn rejects_type_mismatch() {
        let result = set(&EquipmentProfile::default(), "focuser.maxpos", "far");
        assert!(matches!(result, Err(AppError::InvalidInput(_))));

        let result = set(&SettingsProfile::default(), "autofocus.focus_dir", "SIDEWAYS");
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(get(&EquipmentProfile::default(), "rotator.driver").is_err());
        assert!(set(&EquipmentProfile::default(), "camera.gain", "100").is_err());
        assert!(get(&EquipmentProfile::default(), "camera").is_err());
    }

    #[test]
    fn renders_sequences_compactly() {
        let value = serde_yaml::from_str::<Value>("[L, R]").expect("parse");
        assert_eq!(render(&value).expect("render"), r#"["L","R"]"#);
        assert_eq!(render(&Value::Bool(true)).expect("render"), "true");
    }
}
