use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, NewExpense};
use crate::filters::{ExpenseFilterInput, FilteredExpenses};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Trait for expense repository operations.
///
/// Every lookup is scoped to an owner: an expense belonging to someone else
/// is reported exactly like a missing one.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// All of a user's expenses, newest first.
    fn list_expenses(&self, user_id: &str) -> Result<Vec<Expense>>;
    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense>;
    /// Sum of a user's expense amounts dated within `[start, end]`.
    fn sum_expenses_between(&self, user_id: &str, start: NaiveDate, end: NaiveDate)
        -> Result<Decimal>;
    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(
        &self,
        user_id: &str,
        expense_id: &str,
        update: NewExpense,
    ) -> Result<Expense>;
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn list_expenses(
        &self,
        user_id: &str,
        filters: ExpenseFilterInput,
        today: NaiveDate,
    ) -> Result<FilteredExpenses>;
    fn recent_expenses(&self, user_id: &str, limit: usize) -> Result<Vec<Expense>>;
    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense>;
    async fn create_expense(
        &self,
        user_id: &str,
        new_expense: NewExpense,
        today: NaiveDate,
    ) -> Result<Expense>;
    async fn update_expense(
        &self,
        user_id: &str,
        expense_id: &str,
        update: NewExpense,
        today: NaiveDate,
    ) -> Result<Expense>;
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<()>;
}
