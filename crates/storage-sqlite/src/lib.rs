//! SQLite storage implementation for Hormiga.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `hormiga-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations (schema plus seed categories)
//! - Repository implementations for users, categories, expenses and budgets
//! - Database-specific model types (with Diesel derives)
//!
//! ```text
//!   core (domain, traits)
//!            │
//!            ▼
//!   storage-sqlite (this crate)
//!            │
//!            ▼
//!        SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

#[cfg(test)]
mod test_support;

// Repository implementations
pub mod budgets;
pub mod categories;
pub mod expenses;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export repositories
pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use users::UserRepository;

// Re-export from hormiga-core for convenience
pub use hormiga_core::errors::{DatabaseError, Error, Result};
