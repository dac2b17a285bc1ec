//! Reporting API payloads.
//!
//! These types are consumed by the external automation system, so field
//! names stay snake_case and are part of the contract.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budgets::Budget;
use crate::categories::Category;
use crate::expenses::Expense;
use crate::users::User;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub description: Option<String>,
}

impl From<&Category> for ReportCategory {
    fn from(category: &Category) -> Self {
        ReportCategory {
            id: category.id.clone(),
            name: category.name.clone(),
            icon: category.icon.clone(),
            color: category.color.clone(),
            description: category.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportExpense {
    pub id: String,
    pub amount: Decimal,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub category: ReportCategory,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<&Expense> for ReportExpense {
    fn from(expense: &Expense) -> Self {
        ReportExpense {
            id: expense.id.clone(),
            amount: expense.amount,
            description: expense.description.clone(),
            date: expense.date,
            location: expense.location.clone(),
            category: ReportCategory::from(&expense.category),
            created_at: expense.created_at,
            updated_at: expense.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthlySummary {
    pub total: Decimal,
    pub count: usize,
    /// Category name to total spent that month.
    pub categories: BTreeMap<String, Decimal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategorySummary {
    pub total: Decimal,
    pub count: usize,
    pub percentage: Decimal,
}

/// A user's complete spending history.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExpenseHistory {
    #[serde(rename = "first_expense")]
    pub first_expense_date: Option<NaiveDate>,
    #[serde(rename = "last_expense")]
    pub last_expense_date: Option<NaiveDate>,
    pub total_months_active: i64,
    #[serde(rename = "total_expenses")]
    pub total_expense_amount: Decimal,
    pub total_expense_count: usize,
    /// Newest first.
    pub all_expenses: Vec<ReportExpense>,
    /// Keyed by "YYYY-MM".
    pub monthly_summaries: BTreeMap<String, MonthlySummary>,
    /// Keyed by category name.
    #[serde(rename = "categories_summary")]
    pub category_summary: BTreeMap<String, CategorySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportBudget {
    pub monthly_limit: Decimal,
    pub warning_percentage: i32,
    pub critical_percentage: i32,
    pub email_alerts_enabled: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<&Budget> for ReportBudget {
    fn from(budget: &Budget) -> Self {
        ReportBudget {
            monthly_limit: budget.monthly_limit,
            warning_percentage: budget.warning_percentage,
            critical_percentage: budget.critical_percentage,
            email_alerts_enabled: budget.email_alerts_enabled,
            created_at: budget.created_at,
            updated_at: budget.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActiveUserSummary {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
}

impl From<&User> for ActiveUserSummary {
    fn from(user: &User) -> Self {
        ActiveUserSummary {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActiveUsersCriteria {
    pub has_budget: bool,
    pub email_alerts_enabled: bool,
    pub recent_expenses_days: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActiveUsersReport {
    pub users: Vec<ActiveUserSummary>,
    pub total_active_users: usize,
    pub timestamp: DateTime<Utc>,
    pub criteria: ActiveUsersCriteria,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub api_version: String,
    pub data_complete: bool,
}

/// Full report for one user: profile, budget and history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserCompleteReport {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_joined: NaiveDateTime,
    pub budget: ReportBudget,
    pub complete_history: ExpenseHistory,
    pub metadata: ReportMetadata,
}
