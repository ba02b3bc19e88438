//! Directive types - the resolver's output vocabulary.

use serde::Serialize;

/// Marker icon for a step or checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepIcon {
    Check,
    Clock,
    /// No marker. Part of the closed icon vocabulary for renderers; the
    /// resolver never emits it.
    Empty,
}

/// The kind of sequence an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    PaymentStep,
    OrderCheckpoint,
}

/// Allowed UI affordances for one item, derived purely from its state.
///
/// Consumed by the rendering layer; the model never renders anything
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Directive {
    pub icon: StepIcon,
    pub allow_notify_action: bool,
    pub allow_detail_action: bool,
}

/// Badge icon for a reminder channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeIcon {
    Shield,
    Message,
    Calendar,
}

/// Badge color tone for a reminder channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Soft,
    Solid,
    Neutral,
}

/// Fixed presentation pair for one reminder channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderBadge {
    pub icon: BadgeIcon,
    pub tone: BadgeTone,
}
