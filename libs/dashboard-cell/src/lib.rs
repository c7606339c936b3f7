//! Aggregated counters for the landing screen, computed from the other cells.

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{ActivityItem, DashboardError, DashboardSummary, QuickAction};
pub use router::dashboard_routes;
pub use services::DashboardService;
