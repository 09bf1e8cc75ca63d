use std::path::PathBuf;

use tracing::debug;

use crate::config::AppPaths;
use crate::error::AppResult;
use crate::output::Output;
use crate::store::FileProfileStore;

#[derive(Debug)]
pub struct AppContext {
    pub verbose: u8,
    pub paths: AppPaths,
    pub store: FileProfileStore,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(config_dir: Option<PathBuf>, json: bool, verbose: u8) -> AppResult<Self> {
        let paths = AppPaths::discover(config_dir)?;
        debug!(root = %paths.root_dir().display(), "resolved profile root");

        let store = FileProfileStore::new(paths.clone());
        let output = Output::new(json);

        Ok(Self {
            verbose,
            paths,
            store,
            output,
        })
    }
}
