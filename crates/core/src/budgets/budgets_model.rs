//! Budget domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CRITICAL_PERCENTAGE, DEFAULT_WARNING_PERCENTAGE};
use crate::errors::{FieldErrors, Result};
use crate::utils::decimal_utils::amount_problem;

/// A user's monthly budget. At most one per user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub user_id: String,
    pub monthly_limit: Decimal,
    pub warning_percentage: i32,
    pub critical_percentage: i32,
    pub email_alerts_enabled: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Budget settings as submitted by the owner. Omitted fields keep their
/// current value, or the defaults when no budget exists yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInput {
    pub monthly_limit: Decimal,
    #[serde(default)]
    pub warning_percentage: Option<i32>,
    #[serde(default)]
    pub critical_percentage: Option<i32>,
    #[serde(default)]
    pub email_alerts_enabled: Option<bool>,
}

/// Fully resolved settings handed to the repository for an upsert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSettings {
    pub monthly_limit: Decimal,
    pub warning_percentage: i32,
    pub critical_percentage: i32,
    pub email_alerts_enabled: bool,
}

impl BudgetInput {
    /// Fills omitted fields from `existing`, falling back to the defaults.
    pub fn resolve(&self, existing: Option<&Budget>) -> BudgetSettings {
        BudgetSettings {
            monthly_limit: self.monthly_limit,
            warning_percentage: self
                .warning_percentage
                .or(existing.map(|b| b.warning_percentage))
                .unwrap_or(DEFAULT_WARNING_PERCENTAGE),
            critical_percentage: self
                .critical_percentage
                .or(existing.map(|b| b.critical_percentage))
                .unwrap_or(DEFAULT_CRITICAL_PERCENTAGE),
            email_alerts_enabled: self
                .email_alerts_enabled
                .or(existing.map(|b| b.email_alerts_enabled))
                .unwrap_or(true),
        }
    }
}

impl BudgetSettings {
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();

        if let Some(problem) = amount_problem(self.monthly_limit, false) {
            errors.push("monthlyLimit", problem);
        }
        for (field, value) in [
            ("warningPercentage", self.warning_percentage),
            ("criticalPercentage", self.critical_percentage),
        ] {
            if !(1..=100).contains(&value) {
                errors.push(field, "must be between 1 and 100");
            }
        }
        if self.warning_percentage >= self.critical_percentage {
            errors.push(
                "warningPercentage",
                "must be lower than the critical percentage",
            );
        }

        errors.into_result(())
    }
}
