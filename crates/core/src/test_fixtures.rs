//! Builders and an in-memory store shared by the service tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;

use crate::alerts::{BudgetAlert, BudgetAlertNotifier};
use crate::budgets::{Budget, BudgetRepositoryTrait, BudgetSettings};
use crate::categories::{Category, CategoryRepositoryTrait, NewCategory};
use crate::errors::{Error, Result};
use crate::expenses::{sort_newest_first, Expense, ExpenseRepositoryTrait, NewExpense};
use crate::users::{NewUser, ProfileUpdate, User, UserCredentials, UserRepositoryTrait};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn noon(day: NaiveDate) -> NaiveDateTime {
    day.and_hms_opt(12, 0, 0).unwrap()
}

pub fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: format!("fa-{id}"),
        color: "#336699".to_string(),
        description: None,
        created_at: noon(date(2024, 1, 1)),
        updated_at: noon(date(2024, 1, 1)),
    }
}

pub fn expense(id: &str, category: &Category, amount: Decimal, day: NaiveDate) -> Expense {
    Expense {
        id: id.to_string(),
        user_id: "user-1".to_string(),
        category: category.clone(),
        amount,
        date: day,
        description: None,
        location: None,
        created_at: noon(day),
        updated_at: noon(day),
    }
}

pub fn budget(user_id: &str, limit: Decimal, warning: i32, critical: i32) -> Budget {
    Budget {
        user_id: user_id.to_string(),
        monthly_limit: limit,
        warning_percentage: warning,
        critical_percentage: critical,
        email_alerts_enabled: true,
        created_at: noon(date(2024, 1, 1)),
        updated_at: noon(date(2024, 1, 1)),
    }
}

pub fn user(id: &str, username: &str, email: Option<&str>) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        email: email.map(str::to_string),
        first_name: None,
        last_name: None,
        date_joined: noon(date(2024, 1, 1)),
    }
}

/// One store backing every repository trait, so services under test see a
/// consistent view.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    pub users: Arc<Mutex<Vec<UserCredentials>>>,
    pub categories: Arc<Mutex<Vec<Category>>>,
    pub expenses: Arc<Mutex<Vec<Expense>>>,
    pub budgets: Arc<Mutex<Vec<Budget>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, user: User) {
        self.users.lock().unwrap().push(UserCredentials {
            user,
            password_hash: "hash".to_string(),
        });
    }

    pub fn add_category(&self, category: Category) {
        self.categories.lock().unwrap().push(category);
    }

    pub fn add_expense(&self, user_id: &str, mut expense: Expense) {
        expense.user_id = user_id.to_string();
        self.expenses.lock().unwrap().push(expense);
    }

    pub fn add_budget(&self, budget: Budget) {
        self.budgets.lock().unwrap().push(budget);
    }

    fn owned(&self, user_id: &str) -> Vec<Expense> {
        let mut owned: Vec<Expense> = self
            .expenses
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        sort_newest_first(&mut owned);
        owned
    }

    fn build_expense(&self, id: String, user_id: &str, input: NewExpense) -> Result<Expense> {
        let category = self.get_category(&input.category_id)?;
        let now = Utc::now().naive_utc();
        Ok(Expense {
            id,
            user_id: user_id.to_string(),
            category,
            amount: input.amount,
            date: input.date,
            description: input.description,
            location: input.location,
            created_at: now,
            updated_at: now,
        })
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for InMemoryStore {
    fn list_expenses(&self, user_id: &str) -> Result<Vec<Expense>> {
        Ok(self.owned(user_id))
    }

    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense> {
        self.owned(user_id)
            .into_iter()
            .find(|e| e.id == expense_id)
            .ok_or_else(|| Error::NotFound(format!("Expense {expense_id}")))
    }

    fn sum_expenses_between(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal> {
        Ok(self
            .owned(user_id)
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .map(|e| e.amount)
            .sum())
    }

    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        let id = format!("exp-{}", self.expenses.lock().unwrap().len() + 1);
        let expense = self.build_expense(id, user_id, new_expense)?;
        self.expenses.lock().unwrap().push(expense.clone());
        Ok(expense)
    }

    async fn update_expense(
        &self,
        user_id: &str,
        expense_id: &str,
        update: NewExpense,
    ) -> Result<Expense> {
        let replacement = self.build_expense(expense_id.to_string(), user_id, update)?;
        let mut expenses = self.expenses.lock().unwrap();
        let slot = expenses
            .iter_mut()
            .find(|e| e.id == expense_id && e.user_id == user_id)
            .ok_or_else(|| Error::NotFound(format!("Expense {expense_id}")))?;
        *slot = replacement.clone();
        Ok(replacement)
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize> {
        let mut expenses = self.expenses.lock().unwrap();
        let before = expenses.len();
        expenses.retain(|e| !(e.id == expense_id && e.user_id == user_id));
        Ok(before - expenses.len())
    }
}

#[async_trait]
impl CategoryRepositoryTrait for InMemoryStore {
    fn list_categories(&self) -> Result<Vec<Category>> {
        let mut all = self.categories.lock().unwrap().clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    fn get_category(&self, category_id: &str) -> Result<Category> {
        self.categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == category_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Category {category_id}")))
    }

    fn count_expenses_for_category(&self, category_id: &str) -> Result<i64> {
        Ok(self
            .expenses
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.category.id == category_id)
            .count() as i64)
    }

    async fn create_category(&self, _new_category: NewCategory) -> Result<Category> {
        unimplemented!()
    }

    async fn update_category(&self, _category_id: &str, _update: NewCategory) -> Result<Category> {
        unimplemented!()
    }

    async fn delete_category(&self, _category_id: &str) -> Result<usize> {
        unimplemented!()
    }
}

#[async_trait]
impl BudgetRepositoryTrait for InMemoryStore {
    fn get_budget(&self, user_id: &str) -> Result<Option<Budget>> {
        Ok(self
            .budgets
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.user_id == user_id)
            .cloned())
    }

    async fn upsert_budget(&self, user_id: &str, settings: BudgetSettings) -> Result<Budget> {
        let now = Utc::now().naive_utc();
        let mut budgets = self.budgets.lock().unwrap();
        let created_at = budgets
            .iter()
            .find(|b| b.user_id == user_id)
            .map(|b| b.created_at)
            .unwrap_or(now);
        budgets.retain(|b| b.user_id != user_id);
        let budget = Budget {
            user_id: user_id.to_string(),
            monthly_limit: settings.monthly_limit,
            warning_percentage: settings.warning_percentage,
            critical_percentage: settings.critical_percentage,
            email_alerts_enabled: settings.email_alerts_enabled,
            created_at,
            updated_at: now,
        };
        budgets.push(budget.clone());
        Ok(budget)
    }

    async fn delete_budget(&self, user_id: &str) -> Result<usize> {
        let mut budgets = self.budgets.lock().unwrap();
        let before = budgets.len();
        budgets.retain(|b| b.user_id != user_id);
        Ok(before - budgets.len())
    }
}

#[async_trait]
impl UserRepositoryTrait for InMemoryStore {
    fn get_user(&self, user_id: &str) -> Result<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.user.id == user_id)
            .map(|c| c.user.clone())
            .ok_or_else(|| Error::NotFound(format!("User {user_id}")))
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.user.username == username)
            .map(|c| c.user.clone()))
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.user.email.as_deref() == Some(email))
            .map(|c| c.user.clone()))
    }

    fn find_credentials(&self, username: &str) -> Result<Option<UserCredentials>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.user.username == username)
            .cloned())
    }

    fn list_active_users(&self, since: NaiveDate) -> Result<Vec<User>> {
        let budgets = self.budgets.lock().unwrap().clone();
        let expenses = self.expenses.lock().unwrap().clone();
        let mut active: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.user.clone())
            .filter(|u| {
                budgets
                    .iter()
                    .any(|b| b.user_id == u.id && b.email_alerts_enabled)
                    && expenses.iter().any(|e| e.user_id == u.id && e.date >= since)
            })
            .collect();
        active.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(active)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        let user = User {
            id: format!("user-{}", self.users.lock().unwrap().len() + 1),
            username: new_user.username,
            email: new_user.email,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            date_joined: Utc::now().naive_utc(),
        };
        self.users.lock().unwrap().push(UserCredentials {
            user: user.clone(),
            password_hash: new_user.password_hash,
        });
        Ok(user)
    }

    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        let entry = users
            .iter_mut()
            .find(|c| c.user.id == user_id)
            .ok_or_else(|| Error::NotFound(format!("User {user_id}")))?;
        entry.user.email = Some(update.email);
        entry.user.first_name = update.first_name;
        entry.user.last_name = update.last_name;
        Ok(entry.user.clone())
    }
}

/// Captures alerts instead of delivering them.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub sent: Arc<Mutex<Vec<BudgetAlert>>>,
}

impl BudgetAlertNotifier for RecordingNotifier {
    fn notify(&self, alert: BudgetAlert) {
        self.sent.lock().unwrap().push(alert);
    }
}
