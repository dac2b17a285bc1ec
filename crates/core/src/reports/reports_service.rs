use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use log::debug;

use crate::budgets::BudgetRepositoryTrait;
use crate::constants::{ACTIVE_USER_WINDOW_DAYS, REPORT_API_VERSION};
use crate::errors::{Error, Result};
use crate::expenses::ExpenseRepositoryTrait;
use crate::users::UserRepositoryTrait;
use crate::utils::time_utils::days_before;

use super::report_assembler::build_expense_history;
use super::reports_model::{
    ActiveUserSummary, ActiveUsersCriteria, ActiveUsersReport, ReportBudget, ReportMetadata,
    UserCompleteReport,
};
use super::reports_traits::ReportServiceTrait;

pub struct ReportService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ReportService {
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        ReportService {
            user_repository,
            budget_repository,
            expense_repository,
        }
    }
}

impl ReportServiceTrait for ReportService {
    fn active_users(&self, today: NaiveDate, now: DateTime<Utc>) -> Result<ActiveUsersReport> {
        let since = days_before(today, ACTIVE_USER_WINDOW_DAYS);
        let users: Vec<ActiveUserSummary> = self
            .user_repository
            .list_active_users(since)?
            .iter()
            .map(ActiveUserSummary::from)
            .collect();
        debug!("{} active users since {}", users.len(), since);

        Ok(ActiveUsersReport {
            total_active_users: users.len(),
            users,
            timestamp: now,
            criteria: ActiveUsersCriteria {
                has_budget: true,
                email_alerts_enabled: true,
                recent_expenses_days: ACTIVE_USER_WINDOW_DAYS,
            },
        })
    }

    fn complete_user_report(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<UserCompleteReport> {
        let user = match self.user_repository.get_user(user_id) {
            Ok(user) => user,
            Err(err) if err.is_not_found() => {
                return Err(Error::NotFound(format!("User {user_id}")));
            }
            Err(err) => return Err(err),
        };
        let budget = self
            .budget_repository
            .get_budget(user_id)?
            .ok_or_else(|| Error::NotFound(format!("Budget for user {user_id}")))?;
        let expenses = self.expense_repository.list_expenses(user_id)?;

        Ok(UserCompleteReport {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            date_joined: user.date_joined,
            budget: ReportBudget::from(&budget),
            complete_history: build_expense_history(&expenses),
            metadata: ReportMetadata {
                generated_at: now,
                api_version: REPORT_API_VERSION.to_string(),
                data_complete: true,
            },
        })
    }
}
