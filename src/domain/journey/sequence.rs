//! ValidatedSequence - sequence validation and progress calculation.
//!
//! A care journey is an ordered list of lifecycle-tagged items (payment
//! steps, delivery checkpoints). Order is process order, not arbitrary:
//! scanning left to right, every complete item precedes the current item,
//! which precedes every upcoming item, and at most one item is current.
//!
//! `ValidatedSequence::validate` is the sole place these invariants are
//! raised as errors. Everything downstream (progress metrics, the
//! presentation resolver, view assembly) takes a `ValidatedSequence` and
//! cannot fail on them.

use serde::Serialize;

use crate::domain::foundation::{LifecycleState, Percentage, ValidationError};

/// Trait for items that carry a lifecycle state.
///
/// `with_state` returns a copy with a replaced state; items are immutable
/// and state changes always produce a new value.
pub trait HasLifecycle {
    fn state(&self) -> LifecycleState;

    fn with_state(&self, state: LifecycleState) -> Self
    where
        Self: Sized;
}

/// An ordered sequence of journey items whose invariants have been checked.
///
/// Construction is only possible through [`ValidatedSequence::validate`],
/// so holding one is proof that the sequence is non-empty, monotone, and
/// has at most one current item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedSequence<T: HasLifecycle> {
    items: Vec<T>,
    #[serde(skip)]
    current_index: Option<usize>,
}

impl<T: HasLifecycle> ValidatedSequence<T> {
    /// Validates an ordered list of items.
    ///
    /// Errors:
    /// - [`ValidationError::EmptySequence`] for zero items;
    /// - [`ValidationError::NonMonotonic`] when an item's lifecycle rank is
    ///   lower than its predecessor's (a complete item after a current or
    ///   upcoming one, or a current item after an upcoming one);
    /// - [`ValidationError::MultipleCurrent`] when a second current item
    ///   appears.
    ///
    /// Items are examined once in order, so a sequence with several
    /// violations reports the one encountered first.
    pub fn validate(items: Vec<T>) -> Result<Self, ValidationError> {
        if items.is_empty() {
            return Err(ValidationError::EmptySequence);
        }

        let mut current_index: Option<usize> = None;
        let mut last_rank = 0u8;

        for (index, item) in items.iter().enumerate() {
            let rank = item.state().rank();
            if rank < last_rank {
                return Err(ValidationError::non_monotonic(index));
            }
            last_rank = rank;

            if item.state().is_current() {
                match current_index {
                    None => current_index = Some(index),
                    Some(first) => {
                        return Err(ValidationError::multiple_current(first, index));
                    }
                }
            }
        }

        Ok(Self { items, current_index })
    }

    /// The validated items, in process order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items. Never zero.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; retained for slice-like ergonomics.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Aggregate progress: `round_half_up(100 * complete / total)`.
    ///
    /// 0 for an all-upcoming sequence, 100 for an all-complete one.
    pub fn percent_complete(&self) -> Percentage {
        let complete = self
            .items
            .iter()
            .filter(|item| item.state().is_complete())
            .count();
        Percentage::from_ratio(complete, self.items.len())
    }

    /// Index of the single current item, if one exists.
    ///
    /// `None` with 100% progress means fully complete; `None` with 0% means
    /// not started. Both are valid readouts, not errors.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// The item the user should act on next: the current item if present,
    /// else the first upcoming item, else `None` when fully complete.
    pub fn next_actionable(&self) -> Option<(usize, &T)> {
        if let Some(index) = self.current_index {
            return Some((index, &self.items[index]));
        }
        self.items
            .iter()
            .enumerate()
            .find(|(_, item)| item.state().is_upcoming())
    }

    /// True when every item is complete.
    pub fn is_fully_complete(&self) -> bool {
        self.items.iter().all(|item| item.state().is_complete())
    }

    /// True when no item is complete or current.
    pub fn is_not_started(&self) -> bool {
        self.items.iter().all(|item| item.state().is_upcoming())
    }
}

impl<T: HasLifecycle + Clone> ValidatedSequence<T> {
    /// Produces a new sequence with the journey advanced one step: the
    /// current item becomes complete and the first upcoming item becomes
    /// current.
    ///
    /// State never changes in place; actions like settling a payment step
    /// re-derive a whole new snapshot and this models that replacement.
    /// Advancing a fully complete sequence is the identity.
    pub fn advance(&self) -> Self {
        let promote_index = match self.next_actionable() {
            Some((index, item)) if item.state().is_upcoming() => Some(index),
            Some((index, _)) => self.items[index + 1..]
                .iter()
                .position(|item| item.state().is_upcoming())
                .map(|offset| index + 1 + offset),
            None => return self.clone(),
        };

        let items: Vec<T> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                if item.state().is_current() {
                    item.with_state(LifecycleState::Complete)
                } else if Some(index) == promote_index {
                    item.with_state(LifecycleState::Current)
                } else {
                    item.clone()
                }
            })
            .collect();

        let current_index = promote_index;
        Self { items, current_index }
    }
}
