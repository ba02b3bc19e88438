//! Adapters - Implementations of port interfaces.
//!
//! - `mock` - Hardcoded snapshot source with the portal's sample records

pub mod mock;

pub use mock::MockSnapshotSource;
