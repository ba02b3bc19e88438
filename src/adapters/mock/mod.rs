//! Mock snapshot source.
//!
//! Supplies the sample records the portal ships with today: a smart knee
//! brace order for member Jordan Lee. A real backend adapter would
//! replace this behind the same port.

use tracing::debug;

use crate::domain::foundation::{LifecycleState, Percentage, ReminderChannel};
use crate::domain::journey::{
    AlternateSlot, Checkpoint, CoverageSlice, JourneySnapshot, MemberProfile, Reminder, Step,
};
use crate::ports::{SnapshotError, SnapshotSource};

/// Snapshot source backed by hardcoded sample data.
#[derive(Debug, Default)]
pub struct MockSnapshotSource;

impl MockSnapshotSource {
    pub fn new() -> Self {
        Self
    }
}

impl SnapshotSource for MockSnapshotSource {
    fn load(&self) -> Result<JourneySnapshot, SnapshotError> {
        let payment_steps = vec![
            Step::new(
                "Choose amount",
                "Pay in full or split across monthly installments.",
                LifecycleState::Complete,
            )?,
            Step::new(
                "Confirm method",
                "Visa ending in 4098 or add HSA/FSA.",
                LifecycleState::Current,
            )?,
            Step::new(
                "Review & submit",
                "Receive a receipt instantly and notify your care team.",
                LifecycleState::Upcoming,
            )?,
        ];

        let order_timeline = vec![
            Checkpoint::new(
                "Coverage approved",
                "Insurance confirmed your eligibility and shared the EOB.",
                "Apr 14, 2024",
                LifecycleState::Complete,
            )?,
            Checkpoint::new(
                "Device prepared",
                "Smart knee brace configured to the prescription specs.",
                "Apr 28, 2024",
                LifecycleState::Complete,
            )?,
            Checkpoint::new(
                "Out for delivery",
                "Courier will arrive for the fitting window you selected.",
                "May 5, 2024 · 9:00 AM",
                LifecycleState::Current,
            )?,
            Checkpoint::new(
                "Fitting & demo",
                "On-site specialist will walk through device setup and exercises.",
                "May 6, 2024 · 10:30 AM",
                LifecycleState::Upcoming,
            )?,
            Checkpoint::new(
                "Follow-up check-in",
                "Virtual visit to review progress and answer questions.",
                "May 13, 2024",
                LifecycleState::Upcoming,
            )?,
        ];

        let reminders = vec![
            Reminder::new(
                ReminderChannel::Email,
                "Detailed delivery itinerary + portal link for rescheduling.",
                "Sent Apr 30 at 9:15 AM",
            ),
            Reminder::new(
                ReminderChannel::Sms,
                "24-hour reminder with quick reschedule actions.",
                "Scheduled for May 5 at 9:00 AM",
            ),
            Reminder::new(
                ReminderChannel::Portal,
                "Live chat opens 1 hour before your fitting appointment.",
                "Available May 6 at 9:30 AM",
            ),
        ];

        let coverage = vec![
            CoverageSlice {
                label: "Insurance paid".into(),
                amount: "$1,260.00".into(),
                percent: Percentage::new(75),
            },
            CoverageSlice {
                label: "Copay collected".into(),
                amount: "$120.00".into(),
                percent: Percentage::new(7),
            },
            CoverageSlice {
                label: "Balance remaining".into(),
                amount: "$300.00".into(),
                percent: Percentage::new(18),
            },
        ];

        let member = MemberProfile {
            name: "Jordan Lee".into(),
            policy_number: "NUMA-4839201".into(),
            member_id: "JL-109234".into(),
            coverage_tier: "Premier Plus".into(),
        };

        let alternate_slots = vec![
            AlternateSlot {
                date: "Thu · May 9".into(),
                windows: vec!["9:00 AM".into(), "11:30 AM".into(), "2:00 PM".into()],
            },
            AlternateSlot {
                date: "Fri · May 10".into(),
                windows: vec!["10:00 AM".into(), "1:30 PM".into()],
            },
            AlternateSlot {
                date: "Mon · May 13".into(),
                windows: vec!["8:30 AM".into(), "4:00 PM".into()],
            },
        ];

        debug!(
            payment_steps = payment_steps.len(),
            checkpoints = order_timeline.len(),
            reminders = reminders.len(),
            "loaded mock journey snapshot"
        );

        Ok(JourneySnapshot {
            payment_steps,
            order_timeline,
            reminders,
            coverage,
            member,
            alternate_slots,
        })
    }
}
