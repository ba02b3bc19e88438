//! JourneySnapshot - an immutable point-in-time copy of all records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use super::{Checkpoint, Reminder, Step};

/// One slice of the explanation-of-benefits coverage breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageSlice {
    pub label: String,
    /// Display-formatted amount, e.g. "$1,260.00".
    pub amount: String,
    pub percent: Percentage,
}

/// The member identity card shown in the portal header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub name: String,
    pub policy_number: String,
    pub member_id: String,
    pub coverage_tier: String,
}

/// An alternate delivery slot offered for rescheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternateSlot {
    /// Display-formatted day, e.g. "Thu · May 9".
    pub date: String,
    /// Time windows within the day, e.g. "9:00 AM".
    pub windows: Vec<String>,
}

/// An immutable point-in-time copy of every record the dashboard shows.
///
/// A snapshot is constructed once by a data source, borrowed read-only
/// for the duration of one computation, and replaced wholesale on
/// refresh. Nothing in the model mutates it field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneySnapshot {
    pub payment_steps: Vec<Step>,
    pub order_timeline: Vec<Checkpoint>,
    pub reminders: Vec<Reminder>,
    pub coverage: Vec<CoverageSlice>,
    pub member: MemberProfile,
    pub alternate_slots: Vec<AlternateSlot>,
}
