//! Journey module - Steps, checkpoints, reminders, and validated sequences.
//!
//! The care journey is modeled as immutable snapshots of lifecycle-tagged
//! records. `ValidatedSequence` enforces the ordering invariants and
//! derives aggregate progress; everything else here is data.

mod reminder;
mod sequence;
mod snapshot;
mod step;

pub use reminder::Reminder;
pub use sequence::{HasLifecycle, ValidatedSequence};
pub use snapshot::{AlternateSlot, CoverageSlice, JourneySnapshot, MemberProfile};
pub use step::{Checkpoint, Step};
