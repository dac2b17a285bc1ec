pub mod api;
pub mod auth;
pub mod config;
pub mod error;
mod main_lib;
pub mod notifier;

pub use main_lib::{build_state, init_tracing, AppState};
