//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `journey` - Steps, checkpoints, reminders, and validated sequences
//! - `presentation` - Pure mapping from lifecycle state to UI directives
//! - `dashboard` - Serializable view types for the rendering layer

pub mod dashboard;
pub mod foundation;
pub mod journey;
pub mod presentation;
