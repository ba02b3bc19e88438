//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions on lifecycle status enums.

use std::fmt;

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for LifecycleState {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         *self == *target
///             || matches!((self, target), (Upcoming, Current) | (Current, Complete))
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Complete => vec![],
///             Current => vec![Complete],
///             Upcoming => vec![Current],
///         }
///     }
/// }
///
/// // Usage:
/// let new_state = state.transition_to(LifecycleState::Complete)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + fmt::Debug + fmt::Display {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state, excluding the
    /// identity no-op.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    ///
    /// This is the preferred way to change state, as it ensures
    /// the transition is valid according to the state machine rules.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_transition(self, target))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
