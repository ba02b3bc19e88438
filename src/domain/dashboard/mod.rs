//! Dashboard module - serializable view types for the rendering layer.

mod view;

pub use view::{
    AlternateSlotView, CoverageView, DashboardView, ItemView, MemberView, ReminderView,
    SequenceView,
};
