//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod generator;
mod snapshot;

pub use generator::ContentGenerator;
pub use snapshot::{SnapshotError, SnapshotStore};
