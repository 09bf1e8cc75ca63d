use std::fs;
use std::path::Path;

use serde_yaml::Value;
use tracing::{debug, error, info, warn};

use super::ProfileStore;
use super::defaults::{parse_marker, render_marker};
use crate::config::paths::yaml_stems;
use crate::config::{AppPaths, normalize_name};
use crate::error::{AppError, AppResult};
use crate::profile::{ProfileDocument, ProfileKind};

#[derive(Debug, Clone)]
pub struct FileProfileStore {
    paths: AppPaths,
}

impl FileProfileStore {
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }
}

/// Creates `dir` unless it already exists. A file in its place is an error.
pub(crate) fn ensure_dir(dir: &Path) -> AppResult<()> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        error!(path = %dir.display(), "config path exists and is not a directory");
        return Err(AppError::Config(format!(
            "{} already exists and is not a directory",
            dir.display()
        )));
    }

    info!(path = %dir.display(), "creating config directory");
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Parses a YAML document, treating an empty or null document as all defaults.
pub(crate) fn parse_document<P: ProfileDocument>(raw: &str) -> AppResult<P> {
    if raw.trim().is_empty() {
        return Ok(P::default());
    }

    let value: Value = serde_yaml::from_str(raw)?;
    if value.is_null() {
        return Ok(P::default());
    }
    Ok(serde_yaml::from_value(value)?)
}

impl ProfileStore for FileProfileStore {
    fn list(&self, kind: ProfileKind) -> AppResult<Vec<String>> {
        yaml_stems(&self.paths.category_dir(kind))
    }

    fn exists(&self, kind: ProfileKind, name: &str) -> AppResult<bool> {
        let name = normalize_name(name)?;
        Ok(self.paths.profile_file(kind, &name).is_file())
    }

    fn load<P: ProfileDocument>(&self, name: &str) -> AppResult<P> {
        let name = normalize_name(name)?;
        let path = self.paths.profile_file(P::KIND, &name);
        debug!(kind = %P::KIND, path = %path.display(), "loading profile");

        if !path.is_file() {
            return Err(AppError::NotFound {
                kind: P::KIND.as_str(),
                name,
            });
        }

        let raw = fs::read_to_string(&path)?;
        parse_document(&raw).inspect_err(|err| {
            error!(path = %path.display(), %err, "failed to parse profile");
        })
    }

    fn save<P: ProfileDocument>(&self, name: &str, profile: &P) -> AppResult<()> {
        let name = normalize_name(name)?;
        let dir = self.paths.category_dir(P::KIND);
        ensure_dir(&dir)?;

        let path = self.paths.profile_file(P::KIND, &name);
        let payload = serde_yaml::to_string(profile)?;
        fs::write(&path, payload)?;

        info!(kind = %P::KIND, path = %path.display(), "wrote profile");
        Ok(())
    }

    fn remove(&self, kind: ProfileKind, name: &str) -> AppResult<()> {
        let name = normalize_name(name)?;
        let path = self.paths.profile_file(kind, &name);
        if !path.is_file() {
            return Err(AppError::NotFound {
                kind: kind.as_str(),
                name,
            });
        }

        let was_default = self.get_default(kind)?.as_deref() == Some(name.as_str());
        fs::remove_file(&path)?;
        info!(%kind, path = %path.display(), "removed profile");

        if was_default {
            self.reset_default(kind)?;
        }
        Ok(())
    }

    fn get_default(&self, kind: ProfileKind) -> AppResult<Option<String>> {
        let marker = self.paths.default_marker(kind);
        if !marker.is_file() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&marker)?;
        let name = match parse_marker(&raw) {
            Ok(name) => name,
            Err(err) => {
                error!(path = %marker.display(), %err, "error determining default profile");
                None
            }
        };

        let Some(name) = name else {
            debug!(%kind, "no default profile");
            return Ok(None);
        };

        match normalize_name(&name) {
            Ok(name) if self.paths.profile_file(kind, &name).is_file() => {
                debug!(%kind, %name, "using default profile");
                Ok(Some(name))
            }
            _ => {
                warn!(%kind, %name, "default profile does not exist");
                Ok(None)
            }
        }
    }

    fn set_default(&self, kind: ProfileKind, name: &str) -> AppResult<()> {
        let name = normalize_name(name)?;
        if !self.paths.profile_file(kind, &name).is_file() {
            return Err(AppError::NotFound {
                kind: kind.as_str(),
                name,
            });
        }

        ensure_dir(&self.paths.category_dir(kind))?;
        fs::write(self.paths.default_marker(kind), render_marker(Some(&name)))?;
        info!(%kind, %name, "set default profile");
        Ok(())
    }

    fn reset_default(&self, kind: ProfileKind) -> AppResult<()> {
        ensure_dir(&self.paths.category_dir(kind))?;
        fs::write(self.paths.default_marker(kind), render_marker(None))?;
        info!(%kind, "reset default profile");
        Ok(())
    }
}
