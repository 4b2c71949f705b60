use crate::config::ServerConfig;
use records::RecordsStore;
use std::sync::Arc;

/// Shared application state
///
/// Nothing here is mutable: the store holds only the records directory path
/// and every request re-reads the filesystem.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Records directory access (lister, guard, reads)
    pub store: RecordsStore,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> Self {
        let store = RecordsStore::new(config.records_dir.clone());
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
