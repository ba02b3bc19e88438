//! Application handlers.

mod get_dashboard_view;

pub use get_dashboard_view::{DashboardError, GetDashboardViewHandler};
