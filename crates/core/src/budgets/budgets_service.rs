use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};

use crate::errors::{Error, Result};
use crate::expenses::ExpenseRepositoryTrait;
use crate::utils::time_utils::first_day_of_month;

use super::budget_evaluator::{evaluate_budget, BudgetCheck};
use super::budgets_model::{Budget, BudgetInput};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};

pub struct BudgetService {
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        BudgetService {
            budget_repository,
            expense_repository,
        }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_budget(&self, user_id: &str) -> Result<Option<Budget>> {
        self.budget_repository.get_budget(user_id)
    }

    async fn save_budget(&self, user_id: &str, input: BudgetInput) -> Result<Budget> {
        let existing = self.budget_repository.get_budget(user_id)?;
        let settings = input.resolve(existing.as_ref());
        settings.validate()?;
        let budget = self
            .budget_repository
            .upsert_budget(user_id, settings)
            .await?;
        info!(
            "Saved budget for user {} (limit {})",
            user_id, budget.monthly_limit
        );
        Ok(budget)
    }

    async fn delete_budget(&self, user_id: &str) -> Result<()> {
        let deleted = self.budget_repository.delete_budget(user_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound("Budget".to_string()));
        }
        Ok(())
    }

    fn evaluate_current_month(&self, user_id: &str, today: NaiveDate) -> Result<BudgetCheck> {
        let Some(budget) = self.budget_repository.get_budget(user_id)? else {
            return Ok(BudgetCheck::NoBudget);
        };
        let spent = self.expense_repository.sum_expenses_between(
            user_id,
            first_day_of_month(today),
            today,
        )?;
        let check = evaluate_budget(Some(&budget), spent);
        if let Some(evaluation) = check.evaluation() {
            debug!(
                "Budget for user {} is {} ({}%)",
                user_id,
                evaluation.status.as_str(),
                evaluation.percentage_used
            );
        }
        Ok(check)
    }
}
