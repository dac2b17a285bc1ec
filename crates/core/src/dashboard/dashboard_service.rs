use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use crate::budgets::BudgetServiceTrait;
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use crate::periods::resolve_period_key;

use super::dashboard_model::Dashboard;
use super::dashboard_traits::DashboardServiceTrait;
use super::expense_aggregator::{build_chart_data, calculate_dashboard_metrics};

pub struct DashboardService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    budget_service: Arc<dyn BudgetServiceTrait>,
}

impl DashboardService {
    pub fn new(
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        budget_service: Arc<dyn BudgetServiceTrait>,
    ) -> Self {
        DashboardService {
            expense_repository,
            budget_service,
        }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_dashboard(
        &self,
        user_id: &str,
        period_key: &str,
        today: NaiveDate,
    ) -> Result<Dashboard> {
        let period = resolve_period_key(period_key, today);
        let expenses = self.expense_repository.list_expenses(user_id)?;
        let metrics = calculate_dashboard_metrics(&expenses, &period);
        debug!(
            "Dashboard for user {}: {} expenses in {} to {}",
            user_id, metrics.period_count, period.start_date, period.end_date
        );
        let chart_data = build_chart_data(&metrics);
        let budget = self.budget_service.evaluate_current_month(user_id, today)?;

        Ok(Dashboard {
            period,
            metrics,
            chart_data,
            budget,
        })
    }
}
