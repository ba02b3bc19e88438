//! Reminder record for out-of-band notifications.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ReminderChannel;

/// An out-of-band notification, independent of the sequence invariants.
///
/// Reminders are informational records keyed by channel for presentation
/// grouping; they take no part in the lifecycle state machine. The
/// schedule is free text, display-only (e.g. "Sent Apr 30 at 9:15 AM").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    channel: ReminderChannel,
    message: String,
    schedule: String,
}

impl Reminder {
    pub fn new(
        channel: ReminderChannel,
        message: impl Into<String>,
        schedule: impl Into<String>,
    ) -> Self {
        Self {
            channel,
            message: message.into(),
            schedule: schedule.into(),
        }
    }

    pub fn channel(&self) -> ReminderChannel {
        self.channel
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }
}
