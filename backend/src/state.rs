use std::sync::Arc;

use crate::{config::Config, db::connection::DbPool, storage::ObjectStorage};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub storage: Option<Arc<dyn ObjectStorage>>,
    pub config: Config,
}

impl AppState {
    pub fn new(pool: DbPool, storage: Option<Arc<dyn ObjectStorage>>, config: Config) -> Self {
        Self {
            pool,
            storage,
            config,
        }
    }

    /// True when every S3 variable was present at startup. FILE evidence
    /// uploads and downloads require this; LINK evidence never does.
    pub fn storage_configured(&self) -> bool {
        self.storage.is_some()
    }
}
