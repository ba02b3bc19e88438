//! Presentation module - pure state-to-affordance policy.
//!
//! Maps lifecycle states and reminder channels to display directives.
//! No rendering happens here; the output is consumed by an external
//! rendering layer.

mod directive;
mod resolver;

pub use directive::{BadgeIcon, BadgeTone, Directive, ItemKind, ReminderBadge, StepIcon};
pub use resolver::{badge_for, resolve};
