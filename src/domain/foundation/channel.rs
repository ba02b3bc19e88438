//! ReminderChannel enum for notification delivery channels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Delivery channel for a reminder notification.
///
/// Closed set; a value outside it is invalid input, not a representable
/// state. Strings from an external data source are parsed through
/// `FromStr`, which rejects unknown channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderChannel {
    Email,
    Sms,
    Portal,
}

impl ReminderChannel {
    /// All channels, in display order.
    pub const ALL: [ReminderChannel; 3] = [
        ReminderChannel::Email,
        ReminderChannel::Sms,
        ReminderChannel::Portal,
    ];
}

impl FromStr for ReminderChannel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Email" => Ok(ReminderChannel::Email),
            "SMS" => Ok(ReminderChannel::Sms),
            "Portal" => Ok(ReminderChannel::Portal),
            other => Err(ValidationError::unknown_channel(other)),
        }
    }
}

impl fmt::Display for ReminderChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReminderChannel::Email => "Email",
            ReminderChannel::Sms => "SMS",
            ReminderChannel::Portal => "Portal",
        };
        write!(f, "{}", s)
    }
}
