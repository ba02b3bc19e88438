//! Read-only port for obtaining journey snapshots.

use crate::domain::foundation::ValidationError;
use crate::domain::journey::JourneySnapshot;

/// Supplies an immutable point-in-time snapshot of the care journey.
///
/// The model accepts the snapshot as given at call time; it does not
/// fetch, cache, or refresh it. Refreshing (after a reschedule, a payment,
/// a courier update) means loading a whole new snapshot and re-running
/// the computation. The port is synchronous; an async backend would adapt
/// at this boundary.
pub trait SnapshotSource: Send + Sync {
    fn load(&self) -> Result<JourneySnapshot, SnapshotError>;
}

/// Errors a snapshot source can raise.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("Snapshot source unavailable: {0}")]
    Unavailable(String),

    #[error("Snapshot contains invalid records: {0}")]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptySource;

    impl SnapshotSource for EmptySource {
        fn load(&self) -> Result<JourneySnapshot, SnapshotError> {
            Err(SnapshotError::Unavailable("no backend configured".into()))
        }
    }

    #[test]
    fn source_trait_is_object_safe() {
        let source: Box<dyn SnapshotSource> = Box::new(EmptySource);
        assert!(source.load().is_err());
    }

    #[test]
    fn validation_errors_convert_into_snapshot_errors() {
        let err: SnapshotError = ValidationError::EmptySequence.into();
        assert_eq!(err, SnapshotError::Invalid(ValidationError::EmptySequence));
    }

    #[test]
    fn unavailable_displays_reason() {
        let err = SnapshotError::Unavailable("offline".into());
        assert_eq!(format!("{}", err), "Snapshot source unavailable: offline");
    }
}
