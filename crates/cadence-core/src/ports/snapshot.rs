use async_trait::async_trait;

use crate::domain::Calendar;

/// Whole-calendar persistence: a single named record, overwritten
/// wholesale after every successful mutation and read once at session
/// start. A passive backup, not a shared resource.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Load the stored calendar, if any.
    async fn load(&self) -> Result<Option<Calendar>, SnapshotError>;

    /// Overwrite the stored calendar.
    async fn save(&self, calendar: &Calendar) -> Result<(), SnapshotError>;
}

/// Snapshot persistence errors. Callers treat these as non-fatal.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("I/O failed: {0}")]
    Io(String),
}
