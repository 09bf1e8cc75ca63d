//! Astroprofiles: one named equipment, observatory and settings profile bundled together.
//!
//! The reference file lives at the store root and only names its parts:
//!
//! ```yaml
//! equipment: C8Mach1
//! observatory: backyard
//! settings: default
//! ```

use std::fs;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use tracing::{error, info};

use crate::config::paths::yaml_stems;
use crate::config::{AppPaths, normalize_name};
use crate::error::{AppError, AppResult};
use crate::profile::{EquipmentProfile, ObservatoryProfile, ProfileKind, SettingsProfile};
use crate::store::file_store::ensure_dir;
use crate::store::{FileProfileStore, ProfileStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstroReference {
    pub equipment: String,
    pub observatory: String,
    pub settings: String,
}

impl AstroReference {
    pub fn name_for(&self, kind: ProfileKind) -> &str {
        match kind {
            ProfileKind::Equipment => &self.equipment,
            ProfileKind::Observatory => &self.observatory,
            ProfileKind::Settings => &self.settings,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AstroProfile {
    pub name: String,
    pub reference: AstroReference,
    pub equipment: EquipmentProfile,
    pub observatory: ObservatoryProfile,
    pub settings: SettingsProfile,
}

pub fn list(paths: &AppPaths) -> AppResult<Vec<String>> {
    yaml_stems(paths.root_dir())
}

pub fn create_reference(
    paths: &AppPaths,
    name: &str,
    reference: &AstroReference,
    overwrite: bool,
) -> AppResult<()> {
    let name = normalize_name(name)?;
    let path = paths.astroprofile_file(&name);

    if path.is_file() && !overwrite {
        error!(%name, "reference file already exists and overwrite is off");
        return Err(AppError::AlreadyExists(format!("astroprofile `{name}`")));
    }

    ensure_dir(paths.root_dir())?;
    fs::write(&path, serde_yaml::to_string(reference)?)?;
    info!(path = %path.display(), "wrote astroprofile reference");
    Ok(())
}

pub fn read_reference(paths: &AppPaths, name: &str) -> AppResult<AstroReference> {
    let name = normalize_name(name)?;
    let path = paths.astroprofile_file(&name);
    info!(path = %path.display(), "loading astroprofile");

    if !path.is_file() {
        return Err(AppError::NotFound {
            kind: "astro",
            name,
        });
    }

    let raw = fs::read_to_string(&path)?;
    let document: Value = if raw.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str(&raw)?
    };

    let invalid = |reason: String| AppError::InvalidReference {
        name: name.clone(),
        reason,
    };

    if !document.is_mapping() {
        return Err(invalid("document is not a mapping".to_string()));
    }

    let mut missing = Vec::new();
    let mut field = |kind: ProfileKind| match document.get(kind.as_str()) {
        Some(Value::String(value)) if !value.trim().is_empty() => value.trim().to_string(),
        _ => {
            missing.push(kind.as_str());
            String::new()
        }
    };

    let reference = AstroReference {
        equipment: field(ProfileKind::Equipment),
        observatory: field(ProfileKind::Observatory),
        settings: field(ProfileKind::Settings),
    };

    if !missing.is_empty() {
        return Err(invalid(format!("missing {}", missing.join(", "))));
    }
    Ok(reference)
}

/// Reads the reference and every profile it names.
pub fn load(store: &FileProfileStore, name: &str) -> AppResult<AstroProfile> {
    let reference = read_reference(store.paths(), name)?;

    let equipment_name = store.resolve(ProfileKind::Equipment, Some(&reference.equipment))?;
    let observatory_name = store.resolve(ProfileKind::Observatory, Some(&reference.observatory))?;
    let settings_name = store.resolve(ProfileKind::Settings, Some(&reference.settings))?;

    Ok(AstroProfile {
        name: normalize_name(name)?,
        equipment: store.load(&equipment_name)?,
        observatory: store.load(&observatory_name)?,
        settings: store.load(&settings_name)?,
        reference,
    })
}

/// Writes every component profile back under the names the reference holds.
pub fn save(store: &FileProfileStore, profile: &AstroProfile) -> AppResult<()> {
    let reference = &profile.reference;
    store.save(
        &store.resolve(ProfileKind::Equipment, Some(&reference.equipment))?,
        &profile.equipment,
    )?;
    store.save(
        &store.resolve(ProfileKind::Observatory, Some(&reference.observatory))?,
        &profile.observatory,
    )?;
    store.save(
        &store.resolve(ProfileKind::Settings, Some(&reference.settings))?,
        &profile.settings,
    )?;
    Ok(())
}

pub fn remove(paths: &AppPaths, name: &str) -> AppResult<()> {
    let name = normalize_name(name)?;
    let path = paths.astroprofile_file(&name);
    if !path.is_file() {
        return Err(AppError::NotFound {
            kind: "astro",
            name,
        });
    }

    fs::remove_file(&path)?;
    info!(path = %path.display(), "removed astroprofile reference");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> AstroReference {
        AstroReference {
            equipment: "c8".to_string(),
            observatory: "backyard".to_string(),
            settings: "default".to_string(),
        }
    }

    #[test]
    fn refuses_to_overwrite_without_flag() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = AppPaths::with_config_dir(dir.path());

        create_reference(&paths, "rig", &reference(), false).expect("create");
        let again = create_reference(&paths, "rig", &reference(), false);
        assert!(matches!(again, Err(AppError::AlreadyExists(_))));
        create_reference(&paths, "rig", &reference(), true).expect("overwrite");
    }

    #[test]
    fn reference_missing_a_part_is_invalid() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = AppPaths::with_config_dir(dir.path());
        fs::create_dir_all(paths.root_dir()).expect("mkdir");
        fs::write(paths.astroprofile_file("partial"), "equipment: c8\nsettings: s\n")
            .expect("write");

        match read_reference(&paths, "partial") {
            Err(AppError::InvalidReference { reason, .. }) => {
                assert_eq!(reason, "missing observatory");
            }
            other => panic!("expected invalid reference, got {other:?}"),
        }
    }

    #[test]
    fn empty_reference_is_invalid() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = AppPaths::with_config_dir(dir.path());
        fs::create_dir_all(paths.root_dir()).expect("mkdir");
        fs::write(paths.astroprofile_file("empty"), "").expect("write");

        assert!(matches!(
            read_reference(&paths, "empty"),
            Err(AppError::InvalidReference { .. })
        ));
    }

    #[test]
    fn round_trips_reference_names() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = AppPaths::with_config_dir(dir.path());
        create_reference(&paths, "rig", &reference(), false).expect("create");

        assert_eq!(read_reference(&paths, "rig").expect("read"), reference());
        assert_eq!(list(&paths).expect("list"), vec!["rig".to_string()]);
        assert_eq!(reference().name_for(ProfileKind::Observatory), "backyard");
    }
}
