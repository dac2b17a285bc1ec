//! Expense list filtering.

mod filter_engine;
mod filters_model;


pub use filter_engine::{apply_filters, validate_filters};
pub use filters_model::{ExpenseFilterInput, FilterCriteria, FilteredExpenses};
