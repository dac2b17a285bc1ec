//! Hormiga Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the Hormiga expense tracker:
//! period resolution, dashboard aggregation, budget evaluation, expense
//! filtering and the historical report consumed by the reporting API.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod alerts;
pub mod budgets;
pub mod categories;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod expenses;
pub mod filters;
pub mod periods;
pub mod reports;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

#[cfg(test)]
pub(crate) mod test_fixtures;
