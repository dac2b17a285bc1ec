use chrono::{DateTime, Utc};
use log::debug;

use crate::budgets::{Budget, BudgetEvaluation, BudgetStatus};
use crate::users::User;
use crate::utils::decimal_utils::percentage_of;

use super::alerts_model::{AlertType, BudgetAlert};

/// Delivers budget alerts. Implementations must not block the caller: delivery
/// happens in the background and failures are only logged.
pub trait BudgetAlertNotifier: Send + Sync {
    fn notify(&self, alert: BudgetAlert);
}

/// Notifier used when no webhook is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAlertNotifier;

impl BudgetAlertNotifier for NoopAlertNotifier {
    fn notify(&self, alert: BudgetAlert) {
        debug!(
            "Dropping {:?} alert for user {}: no notifier configured",
            alert.alert_type, alert.user_id
        );
    }
}

/// Builds the alert for an evaluation, or `None` when nothing should be sent:
/// the status is not alerting, alerts are disabled, or the user has no email.
pub fn build_budget_alert(
    user: &User,
    budget: &Budget,
    evaluation: &BudgetEvaluation,
    timestamp: DateTime<Utc>,
) -> Option<BudgetAlert> {
    if !budget.email_alerts_enabled || !evaluation.status.is_alerting() {
        return None;
    }
    let user_email = user.email.clone()?;
    let percentage = percentage_of(evaluation.spent, evaluation.monthly_limit);

    let (alert_type, message) = match evaluation.status {
        BudgetStatus::Exceeded => (
            AlertType::BudgetExceeded,
            format!(
                "You have exceeded your monthly budget of {:.2} by {:.2}",
                evaluation.monthly_limit,
                evaluation.overshoot.unwrap_or_default()
            ),
        ),
        _ => (
            AlertType::BudgetCritical,
            format!(
                "You have reached {}% of your monthly budget",
                percentage.normalize()
            ),
        ),
    };

    Some(BudgetAlert {
        user_id: user.id.clone(),
        user_name: user.display_name(),
        user_email,
        budget_limit: evaluation.monthly_limit,
        current_spending: evaluation.spent,
        percentage,
        alert_type,
        message,
        timestamp,
    })
}
