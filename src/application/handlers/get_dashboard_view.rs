//! GetDashboardViewHandler - query handler for the portal dashboard.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::dashboard::{
    AlternateSlotView, CoverageView, DashboardView, MemberView, ReminderView, SequenceView,
};
use crate::domain::foundation::ValidationError;
use crate::domain::journey::ValidatedSequence;
use crate::ports::{SnapshotError, SnapshotSource};

/// Errors that can occur while building the dashboard view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Source(#[from] SnapshotError),

    #[error("Snapshot failed validation: {0}")]
    Validation(#[from] ValidationError),
}

/// Handler that turns one snapshot into one dashboard view.
///
/// Pure apart from the snapshot load: identical snapshots always produce
/// identical views. On any validation failure the handler returns an
/// error and no view; the caller is expected to show an "unable to
/// display status" fallback instead of partial progress.
pub struct GetDashboardViewHandler {
    source: Arc<dyn SnapshotSource>,
}

impl GetDashboardViewHandler {
    pub fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self { source }
    }

    pub fn handle(&self) -> Result<DashboardView, DashboardError> {
        let snapshot = self.source.load()?;

        let payment = ValidatedSequence::validate(snapshot.payment_steps).map_err(|err| {
            warn!(%err, sequence = "payment", "snapshot failed validation");
            err
        })?;
        let order = ValidatedSequence::validate(snapshot.order_timeline).map_err(|err| {
            warn!(%err, sequence = "order", "snapshot failed validation");
            err
        })?;

        let next_action = DashboardView::next_action_label(&payment);
        debug!(
            payment_progress = payment.percent_complete().value(),
            order_progress = order.percent_complete().value(),
            next_action = next_action.as_deref().unwrap_or("none"),
            "assembled dashboard view"
        );

        Ok(DashboardView {
            member: MemberView::from_profile(&snapshot.member),
            coverage: snapshot.coverage.iter().map(CoverageView::from_slice).collect(),
            payment: SequenceView::for_payment(&payment),
            order: SequenceView::for_order(&order),
            reminders: snapshot
                .reminders
                .iter()
                .map(ReminderView::from_reminder)
                .collect(),
            alternate_slots: snapshot
                .alternate_slots
                .iter()
                .map(AlternateSlotView::from_slot)
                .collect(),
            next_action,
        })
    }
}
