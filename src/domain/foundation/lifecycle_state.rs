//! LifecycleState enum for tracking progress of journey items.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Progress of a single step or checkpoint in a care journey.
///
/// Declaration order matters: `Complete < Current < Upcoming` is the total
/// order used for sequence validation, so `Ord` is derived from it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    /// The item is done. Terminal; a finished item is never resurrected.
    Complete,

    /// The single item the user should act on now.
    Current,

    /// Not yet reached.
    #[default]
    Upcoming,
}

impl LifecycleState {
    /// Returns the position of this state in the lifecycle progression.
    ///
    /// Complete -> 0, Current -> 1, Upcoming -> 2. Total and stable; used
    /// for sorting and for the monotonicity check.
    pub const fn rank(&self) -> u8 {
        match self {
            LifecycleState::Complete => 0,
            LifecycleState::Current => 1,
            LifecycleState::Upcoming => 2,
        }
    }

    /// Returns true if the item is finished.
    pub fn is_complete(&self) -> bool {
        matches!(self, LifecycleState::Complete)
    }

    /// Returns true if this is the actionable item.
    pub fn is_current(&self) -> bool {
        matches!(self, LifecycleState::Current)
    }

    /// Returns true if the item has not been reached yet.
    pub fn is_upcoming(&self) -> bool {
        matches!(self, LifecycleState::Upcoming)
    }
}

impl StateMachine for LifecycleState {
    /// Valid transitions:
    /// - Upcoming -> Current
    /// - Current -> Complete
    /// - identity (no-op)
    ///
    /// Nothing moves backward and nothing skips Current. A completed step is
    /// retried only by deriving a new sequence, not by resurrecting it.
    fn can_transition_to(&self, target: &Self) -> bool {
        use LifecycleState::*;
        self == target || matches!((self, target), (Upcoming, Current) | (Current, Complete))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use LifecycleState::*;
        match self {
            Complete => vec![],
            Current => vec![Complete],
            Upcoming => vec![Current],
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LifecycleState::Complete => "Complete",
            LifecycleState::Current => "Current",
            LifecycleState::Upcoming => "Upcoming",
        };
        write!(f, "{}", s)
    }
}
