//! Budget alert payloads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    BudgetCritical,
    BudgetExceeded,
}

/// Notification sent to the automation system when a budget becomes
/// critical or exceeded. Field names are part of the webhook contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAlert {
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub budget_limit: Decimal,
    pub current_spending: Decimal,
    /// Uncapped share of the limit already spent.
    pub percentage: Decimal,
    pub alert_type: AlertType,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
