//! Presentation policy resolver.
//!
//! Pure mapping from lifecycle state (and item kind) to the affordances a
//! renderer may show. Both mappings are exhaustive matches over closed
//! enums: an unmapped value is a compile error here, never a silent
//! default at runtime.

use crate::domain::foundation::{LifecycleState, ReminderChannel};
use super::{BadgeIcon, BadgeTone, Directive, ItemKind, ReminderBadge, StepIcon};

/// Resolves the directive for one step or checkpoint.
///
/// Rules:
/// - icon is `Check` for complete items, `Clock` otherwise;
/// - detail action is always available;
/// - notify action is available only while the item is not complete
///   (users may only request notifications for unfinished items).
///
/// Referentially transparent; identical input always yields an identical
/// directive. Payment steps and order checkpoints currently share the same
/// policy; the kind is part of the input so they can diverge without an
/// API change.
pub fn resolve(state: LifecycleState, kind: ItemKind) -> Directive {
    let icon = match state {
        LifecycleState::Complete => StepIcon::Check,
        LifecycleState::Current | LifecycleState::Upcoming => StepIcon::Clock,
    };
    let allow_detail_action = match kind {
        ItemKind::PaymentStep | ItemKind::OrderCheckpoint => true,
    };
    Directive {
        icon,
        allow_notify_action: !state.is_complete(),
        allow_detail_action,
    }
}

/// Resolves the fixed badge for a reminder channel.
///
/// The table mirrors the portal's badge styling: email badges are soft
/// shield marks, SMS badges are solid message bubbles, portal badges are
/// neutral calendar marks.
pub fn badge_for(channel: ReminderChannel) -> ReminderBadge {
    match channel {
        ReminderChannel::Email => ReminderBadge {
            icon: BadgeIcon::Shield,
            tone: BadgeTone::Soft,
        },
        ReminderChannel::Sms => ReminderBadge {
            icon: BadgeIcon::Message,
            tone: BadgeTone::Solid,
        },
        ReminderChannel::Portal => ReminderBadge {
            icon: BadgeIcon::Calendar,
            tone: BadgeTone::Neutral,
        },
    }
}
