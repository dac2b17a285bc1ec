use crate::dashboard::dashboard_model::Dashboard;
use crate::errors::Result;
use chrono::NaiveDate;

/// Trait for dashboard service operations
pub trait DashboardServiceTrait: Send + Sync {
    /// Builds the dashboard for `period_key`. Unknown keys fall back to the
    /// current month.
    fn get_dashboard(&self, user_id: &str, period_key: &str, today: NaiveDate)
        -> Result<Dashboard>;
}
