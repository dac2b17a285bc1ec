//! Budget alerts sent to the external automation system.

mod alerts_model;
mod alerts_service;

#[cfg(test)]
mod alerts_tests;

pub use alerts_model::{AlertType, BudgetAlert};
pub use alerts_service::{build_budget_alert, BudgetAlertNotifier, NoopAlertNotifier};
