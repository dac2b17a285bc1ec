//! Expense domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::Category;
use crate::constants::{EXPENSE_DESCRIPTION_MAX_LEN, EXPENSE_LOCATION_MAX_LEN};
use crate::errors::{FieldErrors, Result};
use crate::utils::decimal_utils::amount_problem;

/// A single expense with its category resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub category: Category,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub location: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating or replacing an expense. The owner is never part
/// of the payload; it comes from the authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub category_id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl NewExpense {
    /// Trims text fields; blank optional fields become `None`.
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
        }
        NewExpense {
            category_id: self.category_id.trim().to_string(),
            amount: self.amount,
            date: self.date,
            description: clean(self.description),
            location: clean(self.location),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();

        if self.category_id.trim().is_empty() {
            errors.push("categoryId", "is required");
        }
        if let Some(problem) = amount_problem(self.amount, false) {
            errors.push("amount", problem);
        }
        if self
            .description
            .as_ref()
            .is_some_and(|d| d.chars().count() > EXPENSE_DESCRIPTION_MAX_LEN)
        {
            errors.push(
                "description",
                format!("must be at most {EXPENSE_DESCRIPTION_MAX_LEN} characters"),
            );
        }
        if self
            .location
            .as_ref()
            .is_some_and(|l| l.chars().count() > EXPENSE_LOCATION_MAX_LEN)
        {
            errors.push(
                "location",
                format!("must be at most {EXPENSE_LOCATION_MAX_LEN} characters"),
            );
        }

        errors.into_result(())
    }
}

/// Newest first: date desc, then created_at desc, then id desc.
pub fn sort_newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
            .then_with(|| b.id.cmp(&a.id))
    });
}
