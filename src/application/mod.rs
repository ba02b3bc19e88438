//! Application layer - query handlers.
//!
//! Orchestrates domain operations across ports: load a snapshot, validate
//! it, and assemble the dashboard view for the rendering layer.

pub mod handlers;

pub use handlers::{DashboardError, GetDashboardViewHandler};
