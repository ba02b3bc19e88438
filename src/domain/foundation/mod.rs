//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types that form the
//! vocabulary of the care journey domain.

mod channel;
mod errors;
mod lifecycle_state;
mod percentage;
mod state_machine;

pub use channel::ReminderChannel;
pub use errors::ValidationError;
pub use lifecycle_state::LifecycleState;
pub use percentage::Percentage;
pub use state_machine::StateMachine;
