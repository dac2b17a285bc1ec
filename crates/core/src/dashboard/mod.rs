//! Dashboard module - period aggregation and chart series.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;
mod expense_aggregator;


pub use dashboard_model::{CategoryBreakdown, ChartData, DailyTotal, Dashboard, DashboardMetrics};
pub use dashboard_service::DashboardService;
pub use dashboard_traits::DashboardServiceTrait;
pub use expense_aggregator::{build_chart_data, calculate_dashboard_metrics};
