use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::profile::ProfileKind;

const ROOT_DIR: &str = "astroprofiles";
const PROFILE_EXT: &str = "yaml";
const DEFAULT_MARKER: &str = "DEFAULT_PROFILE";

pub const CONFIG_DIR_ENV: &str = "ASTROPROFILE_CONFIG_DIR";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    root_dir: PathBuf,
}

impl AppPaths {
    /// Resolves the store root. An explicit directory wins over
    /// `ASTROPROFILE_CONFIG_DIR`, which wins over the platform config dir.
    pub fn discover(explicit: Option<PathBuf>) -> AppResult<Self> {
        let config_dir = base_dir(explicit, env::var_os(CONFIG_DIR_ENV))?;
        Ok(Self::with_config_dir(config_dir))
    }

    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        let root_dir = config_dir.join(ROOT_DIR);
        Self {
            config_dir,
            root_dir,
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn category_dir(&self, kind: ProfileKind) -> PathBuf {
        self.root_dir.join(kind.dir_name())
    }

    pub fn profile_file(&self, kind: ProfileKind, name: &str) -> PathBuf {
        self.category_dir(kind).join(format!("{name}.{PROFILE_EXT}"))
    }

    pub fn default_marker(&self, kind: ProfileKind) -> PathBuf {
        self.category_dir(kind).join(DEFAULT_MARKER)
    }

    pub fn astroprofile_file(&self, name: &str) -> PathBuf {
        self.root_dir.join(format!("{name}.{PROFILE_EXT}"))
    }
}

/// Picks the config base: the flag, then a non-empty env value, then the platform dir.
fn base_dir(explicit: Option<PathBuf>, env_dir: Option<OsString>) -> AppResult<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = env_dir.filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))
}

/// Sorted file stems of every `*.yaml` file directly inside `dir`.
pub fn yaml_stems(dir: &Path) -> AppResult<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some(PROFILE_EXT) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            names.push(stem.to_string());
        }
    }

    names.sort();
    Ok(names)
}
