//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SnapshotSource` - supplies the immutable journey snapshot

mod snapshot_source;

pub use snapshot_source::{SnapshotError, SnapshotSource};
