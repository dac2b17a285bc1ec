//! Budget status classification.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_utils::round_display;

use super::budgets_model::Budget;

/// Spending level relative to the monthly limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Safe,
    Warning,
    Critical,
    Exceeded,
}

impl BudgetStatus {
    /// Critical and exceeded budgets trigger alerts.
    pub fn is_alerting(&self) -> bool {
        matches!(self, BudgetStatus::Critical | BudgetStatus::Exceeded)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::Safe => "safe",
            BudgetStatus::Warning => "warning",
            BudgetStatus::Critical => "critical",
            BudgetStatus::Exceeded => "exceeded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetEvaluation {
    pub status: BudgetStatus,
    pub spent: Decimal,
    pub monthly_limit: Decimal,
    /// `spent / limit * 100`, capped at 100.
    pub percentage_used: Decimal,
    /// `limit - spent`, floored at 0.
    pub remaining_amount: Decimal,
    /// Amount above the limit. Only present when exceeded.
    pub overshoot: Option<Decimal>,
}

/// Result of checking a user's spending against their budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BudgetCheck {
    NoBudget,
    Evaluated(BudgetEvaluation),
}

impl BudgetCheck {
    pub fn evaluation(&self) -> Option<&BudgetEvaluation> {
        match self {
            BudgetCheck::NoBudget => None,
            BudgetCheck::Evaluated(evaluation) => Some(evaluation),
        }
    }
}

/// Classifies `spent` against `budget`, highest severity first.
pub fn evaluate_budget(budget: Option<&Budget>, spent: Decimal) -> BudgetCheck {
    let Some(budget) = budget else {
        return BudgetCheck::NoBudget;
    };
    let limit = budget.monthly_limit;
    let critical_threshold = limit * Decimal::from(budget.critical_percentage) / dec!(100);
    let warning_threshold = limit * Decimal::from(budget.warning_percentage) / dec!(100);

    let status = if spent >= limit {
        BudgetStatus::Exceeded
    } else if spent >= critical_threshold {
        BudgetStatus::Critical
    } else if spent >= warning_threshold {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Safe
    };

    let percentage_used = if limit <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        round_display(spent / limit * dec!(100)).min(dec!(100))
    };

    BudgetCheck::Evaluated(BudgetEvaluation {
        status,
        spent,
        monthly_limit: limit,
        percentage_used,
        remaining_amount: (limit - spent).max(Decimal::ZERO),
        overshoot: (status == BudgetStatus::Exceeded).then(|| spent - limit),
    })
}
