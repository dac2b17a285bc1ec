use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::{debug, info, warn};

use crate::alerts::{build_budget_alert, BudgetAlertNotifier};
use crate::budgets::{evaluate_budget, BudgetRepositoryTrait};
use crate::categories::CategoryRepositoryTrait;
use crate::errors::{Error, FieldError, Result, ValidationError};
use crate::filters::{apply_filters, validate_filters, ExpenseFilterInput, FilteredExpenses};
use crate::users::UserRepositoryTrait;
use crate::utils::time_utils::first_day_of_month;

use super::expenses_model::{sort_newest_first, Expense, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};

/// Service for owner-scoped expense management.
pub struct ExpenseService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
    notifier: Arc<dyn BudgetAlertNotifier>,
}

impl ExpenseService {
    pub fn new(
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
        notifier: Arc<dyn BudgetAlertNotifier>,
    ) -> Self {
        ExpenseService {
            expense_repository,
            category_repository,
            budget_repository,
            user_repository,
            notifier,
        }
    }

    /// Validates the input and checks the referenced category exists.
    fn prepare(&self, input: NewExpense) -> Result<NewExpense> {
        let input = input.normalized();
        input.validate()?;
        match self.category_repository.get_category(&input.category_id) {
            Ok(_) => Ok(input),
            Err(err) if err.is_not_found() => Err(Error::Validation(ValidationError::Fields(
                vec![FieldError::new("categoryId", "does not match any category")],
            ))),
            Err(err) => Err(err),
        }
    }

    /// Evaluates the owner's current-month budget after a write and hands an
    /// alert to the notifier when it is critical or exceeded. Never fails the
    /// write that triggered it.
    fn check_budget_alert(&self, user_id: &str, today: NaiveDate) {
        if let Err(err) = self.try_budget_alert(user_id, today) {
            warn!("Budget alert check failed for user {}: {}", user_id, err);
        }
    }

    fn try_budget_alert(&self, user_id: &str, today: NaiveDate) -> Result<()> {
        let Some(budget) = self.budget_repository.get_budget(user_id)? else {
            return Ok(());
        };
        if !budget.email_alerts_enabled {
            return Ok(());
        }
        let spent = self.expense_repository.sum_expenses_between(
            user_id,
            first_day_of_month(today),
            today,
        )?;
        let check = evaluate_budget(Some(&budget), spent);
        let Some(evaluation) = check.evaluation() else {
            return Ok(());
        };
        if !evaluation.status.is_alerting() {
            return Ok(());
        }

        let user = self.user_repository.get_user(user_id)?;
        match build_budget_alert(&user, &budget, evaluation, Utc::now()) {
            Some(alert) => {
                info!(
                    "Budget {} for user {}, sending alert",
                    evaluation.status.as_str(),
                    user_id
                );
                self.notifier.notify(alert);
            }
            None => debug!("User {} has no email; skipping budget alert", user_id),
        }
        Ok(())
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn list_expenses(
        &self,
        user_id: &str,
        filters: ExpenseFilterInput,
        today: NaiveDate,
    ) -> Result<FilteredExpenses> {
        let criteria = validate_filters(&filters)?;
        let expenses = self.expense_repository.list_expenses(user_id)?;
        Ok(apply_filters(expenses, &criteria, today))
    }

    fn recent_expenses(&self, user_id: &str, limit: usize) -> Result<Vec<Expense>> {
        let mut expenses = self.expense_repository.list_expenses(user_id)?;
        sort_newest_first(&mut expenses);
        expenses.truncate(limit);
        Ok(expenses)
    }

    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense> {
        self.expense_repository.get_expense(user_id, expense_id)
    }

    async fn create_expense(
        &self,
        user_id: &str,
        new_expense: NewExpense,
        today: NaiveDate,
    ) -> Result<Expense> {
        let new_expense = self.prepare(new_expense)?;
        let expense = self
            .expense_repository
            .create_expense(user_id, new_expense)
            .await?;
        debug!("Created expense {} for user {}", expense.id, user_id);
        self.check_budget_alert(user_id, today);
        Ok(expense)
    }

    async fn update_expense(
        &self,
        user_id: &str,
        expense_id: &str,
        update: NewExpense,
        today: NaiveDate,
    ) -> Result<Expense> {
        let update = self.prepare(update)?;
        // Ownership check first so foreign ids read as missing.
        self.expense_repository.get_expense(user_id, expense_id)?;
        let expense = self
            .expense_repository
            .update_expense(user_id, expense_id, update)
            .await?;
        self.check_budget_alert(user_id, today);
        Ok(expense)
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<()> {
        let deleted = self
            .expense_repository
            .delete_expense(user_id, expense_id)
            .await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Expense {expense_id}")));
        }
        Ok(())
    }
}
