//! Application state - shared across all handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use cadence_core::domain::Calendar;
use cadence_core::ports::{ContentGenerator, SnapshotStore};
use cadence_infra::llm::OpenAiGenerator;
use cadence_infra::snapshot::{FileSnapshotStore, MemorySnapshotStore};

use crate::config::AppConfig;

/// Shared application state.
///
/// The held calendar is the single mutable resource. Handlers take the
/// write lock only around merges and edits, never across a gateway call,
/// so independent regenerations can be in flight concurrently.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn ContentGenerator>,
    pub snapshots: Arc<dyn SnapshotStore>,
    pub calendar: Arc<RwLock<Option<Calendar>>>,
}

impl AppState {
    /// State over explicit port implementations, holding no calendar.
    pub fn with_ports(
        generator: Arc<dyn ContentGenerator>,
        snapshots: Arc<dyn SnapshotStore>,
    ) -> Self {
        Self {
            generator,
            snapshots,
            calendar: Arc::new(RwLock::new(None)),
        }
    }

    /// Build the application state from config and restore the persisted
    /// snapshot. The snapshot is read exactly once, here.
    pub async fn new(config: &AppConfig) -> std::io::Result<Self> {
        let api_key = config
            .openai_api_key
            .clone()
            .ok_or_else(|| std::io::Error::other("OPENAI_API_KEY is not set"))?;

        let generator: Arc<dyn ContentGenerator> = Arc::new(OpenAiGenerator::new(
            api_key,
            config.openai_model.clone(),
            config.openai_api_url.clone(),
        ));

        let snapshots: Arc<dyn SnapshotStore> = match &config.snapshot_path {
            Some(path) => {
                tracing::info!(path = %path, "Using file-backed snapshot store");
                Arc::new(FileSnapshotStore::new(path.clone()))
            }
            None => {
                tracing::info!("SNAPSHOT_PATH not set - snapshot kept in memory only");
                Arc::new(MemorySnapshotStore::new())
            }
        };

        let state = Self::with_ports(generator, snapshots);

        // A missing or corrupt record is not fatal.
        match state.snapshots.load().await {
            Ok(Some(calendar)) => {
                tracing::info!(posts = calendar.posts.len(), "Restored calendar snapshot");
                *state.calendar.write().await = Some(calendar);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Failed to restore calendar snapshot");
            }
        }

        Ok(state)
    }
}
