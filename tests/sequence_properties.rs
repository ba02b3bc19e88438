//! Property tests for sequence validation and progress calculation.

use proptest::prelude::*;

use numa_care::domain::foundation::{LifecycleState, ValidationError};
use numa_care::domain::journey::{Step, ValidatedSequence};

fn step(index: usize, state: LifecycleState) -> Step {
    Step::new(format!("step {}", index), "", state).unwrap()
}

/// Builds a well-formed sequence: `complete` complete items, then an
/// optional current item, then `upcoming` upcoming items.
fn monotone(complete: usize, has_current: bool, upcoming: usize) -> Vec<Step> {
    let mut items = Vec::new();
    for i in 0..complete {
        items.push(step(i, LifecycleState::Complete));
    }
    if has_current {
        items.push(step(complete, LifecycleState::Current));
    }
    for i in 0..upcoming {
        items.push(step(complete + 1 + i, LifecycleState::Upcoming));
    }
    items
}

proptest! {
    #[test]
    fn monotone_sequences_validate(
        complete in 0usize..12,
        has_current in any::<bool>(),
        upcoming in 0usize..12,
    ) {
        let items = monotone(complete, has_current, upcoming);
        prop_assume!(!items.is_empty());
        prop_assert!(ValidatedSequence::validate(items).is_ok());
    }

    #[test]
    fn percent_complete_stays_in_bounds_and_hits_ends(
        complete in 0usize..12,
        has_current in any::<bool>(),
        upcoming in 0usize..12,
    ) {
        let items = monotone(complete, has_current, upcoming);
        prop_assume!(!items.is_empty());
        let seq = ValidatedSequence::validate(items).unwrap();
        let pct = seq.percent_complete().value();

        prop_assert!(pct <= 100);
        prop_assert_eq!(pct == 0, complete == 0);
        prop_assert_eq!(pct == 100, !has_current && upcoming == 0);
    }

    #[test]
    fn current_index_points_at_the_unique_current(
        complete in 0usize..12,
        has_current in any::<bool>(),
        upcoming in 0usize..12,
    ) {
        let items = monotone(complete, has_current, upcoming);
        prop_assume!(!items.is_empty());
        let seq = ValidatedSequence::validate(items).unwrap();

        if has_current {
            prop_assert_eq!(seq.current_index(), Some(complete));
        } else {
            prop_assert_eq!(seq.current_index(), None);
        }
    }

    #[test]
    fn next_actionable_is_current_else_first_upcoming(
        complete in 0usize..12,
        has_current in any::<bool>(),
        upcoming in 0usize..12,
    ) {
        let items = monotone(complete, has_current, upcoming);
        prop_assume!(!items.is_empty());
        let seq = ValidatedSequence::validate(items).unwrap();

        match seq.next_actionable() {
            Some((index, item)) if has_current => {
                prop_assert_eq!(index, complete);
                prop_assert!(item.state().is_current());
            }
            Some((index, item)) => {
                prop_assert_eq!(index, complete);
                prop_assert!(item.state().is_upcoming());
            }
            None => {
                prop_assert!(!has_current && upcoming == 0);
            }
        }
    }

    #[test]
    fn a_complete_item_after_the_current_is_rejected(
        complete in 0usize..6,
        upcoming in 0usize..6,
    ) {
        let mut items = monotone(complete, true, upcoming);
        items.push(step(items.len(), LifecycleState::Complete));
        let result = ValidatedSequence::validate(items);
        let rejected = matches!(result, Err(ValidationError::NonMonotonic { .. }));
        prop_assert!(rejected, "expected NonMonotonic, got {:?}", result);
    }

    #[test]
    fn a_second_current_item_is_rejected(
        complete in 0usize..6,
        upcoming in 0usize..6,
    ) {
        // Two currents back to back, otherwise sorted.
        let mut items = monotone(complete, true, 0);
        items.push(step(items.len(), LifecycleState::Current));
        for i in 0..upcoming {
            items.push(step(100 + i, LifecycleState::Upcoming));
        }
        let result = ValidatedSequence::validate(items);
        let rejected = matches!(result, Err(ValidationError::MultipleCurrent { .. }));
        prop_assert!(rejected, "expected MultipleCurrent, got {:?}", result);
    }

    #[test]
    fn validation_and_metrics_are_idempotent(
        complete in 0usize..8,
        has_current in any::<bool>(),
        upcoming in 0usize..8,
    ) {
        let items = monotone(complete, has_current, upcoming);
        prop_assume!(!items.is_empty());

        let first = ValidatedSequence::validate(items.clone()).unwrap();
        let second = ValidatedSequence::validate(items).unwrap();
        prop_assert_eq!(first.percent_complete(), second.percent_complete());
        prop_assert_eq!(first.current_index(), second.current_index());
        prop_assert_eq!(&first, &second);
    }

    #[test]
    fn advancing_preserves_the_invariants(
        complete in 0usize..8,
        has_current in any::<bool>(),
        upcoming in 0usize..8,
    ) {
        let items = monotone(complete, has_current, upcoming);
        prop_assume!(!items.is_empty());
        let seq = ValidatedSequence::validate(items).unwrap();

        let advanced = seq.advance();
        prop_assert!(ValidatedSequence::validate(advanced.items().to_vec()).is_ok());
        prop_assert!(advanced.percent_complete() >= seq.percent_complete());
    }
}
