//! In-memory snapshot store - used when no snapshot path is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use cadence_core::domain::Calendar;
use cadence_core::ports::{SnapshotError, SnapshotStore};

/// Keeps the serialized record in process memory. Lost on restart.
///
/// The record is stored as JSON text rather than a live `Calendar`, so
/// save/load crosses the same serialize/deserialize boundary as the
/// file-backed store.
pub struct MemorySnapshotStore {
    record: RwLock<Option<String>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self {
            record: RwLock::new(None),
        }
    }
}

impl Default for MemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn load(&self) -> Result<Option<Calendar>, SnapshotError> {
        let record = self.record.read().await;
        record
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(|e| SnapshotError::Serialization(e.to_string()))
    }

    async fn save(&self, calendar: &Calendar) -> Result<(), SnapshotError> {
        let json = serde_json::to_string(calendar)
            .map_err(|e| SnapshotError::Serialization(e.to_string()))?;
        *self.record.write().await = Some(json);
        Ok(())
    }
}
