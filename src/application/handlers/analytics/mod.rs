//! Analytics read-back handlers.

mod get_analytics_dashboard;

pub use get_analytics_dashboard::{
    AnalyticsDashboard, GetAnalyticsDashboardHandler, GetAnalyticsDashboardQuery,
    DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
