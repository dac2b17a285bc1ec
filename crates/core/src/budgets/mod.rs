//! Budgets module - budget settings, status evaluation and services.

mod budget_evaluator;
mod budgets_model;
mod budgets_service;
mod budgets_traits;

#[cfg(test)]
mod budget_evaluator_tests;

pub use budget_evaluator::{evaluate_budget, BudgetCheck, BudgetEvaluation, BudgetStatus};
pub use budgets_model::{Budget, BudgetInput, BudgetSettings};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
