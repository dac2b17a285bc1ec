//! Expense filter models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expenses::Expense;
use crate::periods::{PeriodKey, PeriodRange};

/// Raw filter values as they arrive in a query string. Blank values count as
/// absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseFilterInput {
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date_from: Option<String>,
    #[serde(default)]
    pub date_to: Option<String>,
    #[serde(default)]
    pub min_amount: Option<String>,
    #[serde(default)]
    pub max_amount: Option<String>,
}

/// Validated, typed filter criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub period: Option<PeriodKey>,
    pub category_id: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
}

impl FilterCriteria {
    /// True if any criterion is set.
    pub fn is_active(&self) -> bool {
        self.period.is_some()
            || self.category_id.is_some()
            || self.date_from.is_some()
            || self.date_to.is_some()
            || self.min_amount.is_some()
            || self.max_amount.is_some()
    }

    /// The period key when it selects a range on its own.
    pub fn predefined_period(&self) -> Option<PeriodKey> {
        self.period.filter(PeriodKey::is_predefined)
    }
}

/// A filtered, newest-first view of a user's expenses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilteredExpenses {
    pub expenses: Vec<Expense>,
    pub active_period_label: Option<String>,
    pub period_range: Option<PeriodRange>,
    pub has_active_filters: bool,
    pub total_filtered: Decimal,
    pub count_filtered: usize,
}
