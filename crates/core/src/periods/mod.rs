//! Period resolution - symbolic period keys to concrete date ranges.

mod period_model;
mod period_resolver;


pub use period_model::{PeriodKey, PeriodRange};
pub use period_resolver::{custom_period, resolve_period, resolve_period_key};
