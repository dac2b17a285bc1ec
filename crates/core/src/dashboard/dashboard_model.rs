//! Dashboard domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budgets::BudgetCheck;
use crate::expenses::Expense;
use crate::periods::PeriodRange;

/// Spending for one category inside the selected period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category_id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub total: Decimal,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub period_total: Decimal,
    pub period_count: usize,
    pub average_daily: Decimal,
    /// Most recent expenses overall, independent of the period.
    pub recent_expenses: Vec<Expense>,
    pub category_breakdown: Vec<CategoryBreakdown>,
    pub daily_totals: Vec<DailyTotal>,
}

/// Parallel series consumed by the doughnut and line charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub category_names: Vec<String>,
    pub category_amounts: Vec<Decimal>,
    pub category_colors: Vec<String>,
    pub daily_dates: Vec<String>,
    pub daily_amounts: Vec<Decimal>,
}

/// Everything the dashboard view needs for one period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub period: PeriodRange,
    pub metrics: DashboardMetrics,
    pub chart_data: ChartData,
    /// Always evaluated over the current calendar month.
    pub budget: BudgetCheck,
}
