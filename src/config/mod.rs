pub mod paths;
pub mod profile;

pub use paths::{AppPaths, CONFIG_DIR_ENV};
pub use profile::{DEFAULT_ALIAS, normalize_name, wants_default};
