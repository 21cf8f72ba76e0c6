use std::sync::Arc;

use common::storage::ArtifactStore;

use crate::config::AppConfig;
use crate::store::RecordStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub records: Arc<RecordStore>,
    pub artifacts: Arc<dyn ArtifactStore>,
}
