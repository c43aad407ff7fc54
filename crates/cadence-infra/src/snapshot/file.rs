//! File-backed snapshot store - one JSON record, overwritten wholesale.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use cadence_core::domain::Calendar;
use cadence_core::ports::{SnapshotError, SnapshotStore};

/// Persists the snapshot as pretty-printed JSON at a fixed path.
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn load(&self) -> Result<Option<Calendar>, SnapshotError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SnapshotError::Io(e.to_string())),
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| SnapshotError::Serialization(e.to_string()))
    }

    async fn save(&self, calendar: &Calendar) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(calendar)
            .map_err(|e| SnapshotError::Serialization(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| SnapshotError::Io(e.to_string()))?;
        debug!(path = %self.path.display(), "Snapshot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::domain::{BrandContext, BrandVoice};

    fn scratch_path() -> PathBuf {
        std::env::temp_dir().join(format!("cadence-snapshot-{}.json", uuid::Uuid::new_v4()))
    }

    fn calendar() -> Calendar {
        Calendar::from_drafts(
            BrandContext {
                voice: BrandVoice {
                    brand_description: "Food truck".to_string(),
                    tone: "Funny".to_string(),
                    user_type: Some("Local Service".to_string()),
                    temperature: None,
                },
                frequency: 2,
            },
            vec![],
        )
    }

    #[tokio::test]
    async fn missing_file_loads_none() {
        let store = FileSnapshotStore::new(scratch_path());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let path = scratch_path();
        let store = FileSnapshotStore::new(path.clone());

        store.save(&calendar()).await.unwrap();
        let restored = store.load().await.unwrap().unwrap();
        assert_eq!(restored.brand.frequency, 2);
        assert_eq!(
            restored.brand.voice.user_type.as_deref(),
            Some("Local Service")
        );

        tokio::fs::remove_file(path).await.unwrap();
    }

    #[tokio::test]
    async fn corrupt_record_is_a_serialization_error() {
        let path = scratch_path();
        tokio::fs::write(&path, "not json").await.unwrap();

        let store = FileSnapshotStore::new(path.clone());
        assert!(matches!(
            store.load().await,
            Err(SnapshotError::Serialization(_))
        ));

        tokio::fs::remove_file(path).await.unwrap();
    }
}
