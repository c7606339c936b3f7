pub mod dashboard;

pub use dashboard::{DashboardService, DAILY_REVENUE_RUB, QUICK_ACTIONS};
