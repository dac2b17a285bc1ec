use crate::errors::Result;
use crate::reports::reports_model::{ActiveUsersReport, UserCompleteReport};
use chrono::{DateTime, NaiveDate, Utc};

/// Trait for reporting service operations
pub trait ReportServiceTrait: Send + Sync {
    /// Users with a budget, alerts enabled and an expense in the trailing
    /// window ending `today`.
    fn active_users(&self, today: NaiveDate, now: DateTime<Utc>) -> Result<ActiveUsersReport>;
    /// Complete report for one user. Not found when the user is missing or
    /// has no budget.
    fn complete_user_report(&self, user_id: &str, now: DateTime<Utc>)
        -> Result<UserCompleteReport>;
}
