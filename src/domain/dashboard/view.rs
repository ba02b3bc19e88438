//! Dashboard view types - the model's output to the rendering layer.
//!
//! These are plain serializable records: validated items paired with
//! their resolved directives, plus the aggregate metrics. The rendering
//! layer owns everything visual; on a validation failure no view is
//! produced at all, so a renderer never paints a partially computed
//! progress bar.

use serde::Serialize;

use crate::domain::foundation::{LifecycleState, Percentage};
use crate::domain::journey::{
    AlternateSlot, Checkpoint, CoverageSlice, MemberProfile, Reminder, Step, ValidatedSequence,
};
use crate::domain::presentation::{badge_for, resolve, Directive, ItemKind, ReminderBadge};

/// One sequence item with its resolved presentation directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub title: String,
    pub description: String,
    /// Present for checkpoints, absent for steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub state: LifecycleState,
    pub directive: Directive,
}

/// A validated sequence with its aggregate metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceView {
    pub percent_complete: Percentage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_index: Option<usize>,
    pub items: Vec<ItemView>,
}

impl SequenceView {
    /// Builds the view for a validated payment sequence.
    pub fn for_payment(sequence: &ValidatedSequence<Step>) -> Self {
        Self {
            percent_complete: sequence.percent_complete(),
            current_index: sequence.current_index(),
            items: sequence
                .items()
                .iter()
                .map(|step| ItemView {
                    title: step.title().to_string(),
                    description: step.description().to_string(),
                    date: None,
                    state: step.state(),
                    directive: resolve(step.state(), ItemKind::PaymentStep),
                })
                .collect(),
        }
    }

    /// Builds the view for a validated order timeline.
    pub fn for_order(sequence: &ValidatedSequence<Checkpoint>) -> Self {
        Self {
            percent_complete: sequence.percent_complete(),
            current_index: sequence.current_index(),
            items: sequence
                .items()
                .iter()
                .map(|checkpoint| ItemView {
                    title: checkpoint.title().to_string(),
                    description: checkpoint.description().to_string(),
                    date: Some(checkpoint.date().to_string()),
                    state: checkpoint.state(),
                    directive: resolve(checkpoint.state(), ItemKind::OrderCheckpoint),
                })
                .collect(),
        }
    }
}

/// The member identity card, shaped for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberView {
    pub name: String,
    pub policy_number: String,
    pub member_id: String,
    pub coverage_tier: String,
}

impl MemberView {
    pub fn from_profile(profile: &MemberProfile) -> Self {
        Self {
            name: profile.name.clone(),
            policy_number: profile.policy_number.clone(),
            member_id: profile.member_id.clone(),
            coverage_tier: profile.coverage_tier.clone(),
        }
    }
}

/// One coverage breakdown slice, shaped for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageView {
    pub label: String,
    pub amount: String,
    pub percent: Percentage,
}

impl CoverageView {
    pub fn from_slice(slice: &CoverageSlice) -> Self {
        Self {
            label: slice.label.clone(),
            amount: slice.amount.clone(),
            percent: slice.percent,
        }
    }
}

/// One alternate delivery slot, shaped for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternateSlotView {
    pub date: String,
    pub windows: Vec<String>,
}

impl AlternateSlotView {
    pub fn from_slot(slot: &AlternateSlot) -> Self {
        Self {
            date: slot.date.clone(),
            windows: slot.windows.clone(),
        }
    }
}

/// A reminder with its resolved badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderView {
    pub channel: String,
    pub message: String,
    pub schedule: String,
    pub badge: ReminderBadge,
}

impl ReminderView {
    pub fn from_reminder(reminder: &Reminder) -> Self {
        Self {
            channel: reminder.channel().to_string(),
            message: reminder.message().to_string(),
            schedule: reminder.schedule().to_string(),
            badge: badge_for(reminder.channel()),
        }
    }
}

/// The complete dashboard view: everything a renderer needs to paint the
/// portal page for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub member: MemberView,
    pub coverage: Vec<CoverageView>,
    pub payment: SequenceView,
    pub order: SequenceView,
    pub reminders: Vec<ReminderView>,
    pub alternate_slots: Vec<AlternateSlotView>,
    /// Title of the payment sequence's next actionable step, shown as
    /// the header's "next action". Absent when payment is settled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action: Option<String>,
}

impl DashboardView {
    /// Derives the header's next-action label from a validated payment
    /// sequence.
    pub fn next_action_label(sequence: &ValidatedSequence<Step>) -> Option<String> {
        sequence
            .next_actionable()
            .map(|(_, step)| step.title().to_string())
    }
}
