use crate::budgets::budget_evaluator::BudgetCheck;
use crate::budgets::budgets_model::{Budget, BudgetInput, BudgetSettings};
use crate::errors::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    fn get_budget(&self, user_id: &str) -> Result<Option<Budget>>;
    /// Inserts or replaces the user's single budget.
    async fn upsert_budget(&self, user_id: &str, settings: BudgetSettings) -> Result<Budget>;
    async fn delete_budget(&self, user_id: &str) -> Result<usize>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_budget(&self, user_id: &str) -> Result<Option<Budget>>;
    async fn save_budget(&self, user_id: &str, input: BudgetInput) -> Result<Budget>;
    async fn delete_budget(&self, user_id: &str) -> Result<()>;
    /// Evaluates spending from the first of `today`'s month through `today`.
    fn evaluate_current_month(&self, user_id: &str, today: NaiveDate) -> Result<BudgetCheck>;
}
