pub mod defaults;
pub mod file_store;

pub use file_store::FileProfileStore;

use crate::config::{normalize_name, wants_default};
use crate::error::{AppError, AppResult};
use crate::profile::{ProfileDocument, ProfileKind};

pub trait ProfileStore {
    fn list(&self, kind: ProfileKind) -> AppResult<Vec<String>>;
    fn exists(&self, kind: ProfileKind, name: &str) -> AppResult<bool>;
    fn load<P: ProfileDocument>(&self, name: &str) -> AppResult<P>;
    fn save<P: ProfileDocument>(&self, name: &str, profile: &P) -> AppResult<()>;
    fn remove(&self, kind: ProfileKind, name: &str) -> AppResult<()>;

    fn get_default(&self, kind: ProfileKind) -> AppResult<Option<String>>;
    fn set_default(&self, kind: ProfileKind, name: &str) -> AppResult<()>;
    fn reset_default(&self, kind: ProfileKind) -> AppResult<()>;

    /// Maps a requested name to a stored one; `None` and `default` follow the marker,
    /// a blank name is rejected.
    fn resolve(&self, kind: ProfileKind, requested: Option<&str>) -> AppResult<String> {
        if wants_default(requested) {
            return self
                .get_default(kind)?
                .ok_or(AppError::NoDefaultProfile(kind.as_str()));
        }

        normalize_name(requested.unwrap_or_default())
    }
}
