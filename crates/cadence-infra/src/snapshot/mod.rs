//! Snapshot stores - whole-calendar persistence behind the core port.

mod file;
mod memory;

pub use file::FileSnapshotStore;
pub use memory::MemorySnapshotStore;
