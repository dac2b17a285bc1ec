use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use crate::constants::RECENT_EXPENSES_LIMIT;
use crate::expenses::{sort_newest_first, Expense};
use crate::periods::PeriodRange;
use crate::utils::decimal_utils::round_display;
use crate::utils::time_utils::inclusive_day_count;

use super::dashboard_model::{CategoryBreakdown, ChartData, DailyTotal, DashboardMetrics};

/// Derives dashboard metrics for `range` from one user's expenses.
pub fn calculate_dashboard_metrics(expenses: &[Expense], range: &PeriodRange) -> DashboardMetrics {
    let in_period: Vec<&Expense> = expenses.iter().filter(|e| range.contains(e.date)).collect();

    let period_total: Decimal = in_period.iter().map(|e| e.amount).sum();
    let days = inclusive_day_count(range.start_date, range.end_date);
    let average_daily = if days > 0 {
        round_display(period_total / Decimal::from(days))
    } else {
        Decimal::ZERO
    };

    let mut recent_expenses = expenses.to_vec();
    sort_newest_first(&mut recent_expenses);
    recent_expenses.truncate(RECENT_EXPENSES_LIMIT);

    DashboardMetrics {
        period_total,
        period_count: in_period.len(),
        average_daily,
        recent_expenses,
        category_breakdown: category_breakdown(&in_period),
        daily_totals: daily_totals(&in_period),
    }
}

fn category_breakdown(expenses: &[&Expense]) -> Vec<CategoryBreakdown> {
    let mut by_category: HashMap<&str, CategoryBreakdown> = HashMap::new();
    for expense in expenses {
        let entry = by_category
            .entry(expense.category.id.as_str())
            .or_insert_with(|| CategoryBreakdown {
                category_id: expense.category.id.clone(),
                name: expense.category.name.clone(),
                color: expense.category.color.clone(),
                icon: expense.category.icon.clone(),
                total: Decimal::ZERO,
                count: 0,
            });
        entry.total += expense.amount;
        entry.count += 1;
    }

    let mut breakdown: Vec<CategoryBreakdown> = by_category.into_values().collect();
    breakdown.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.name.cmp(&b.name)));
    breakdown
}

fn daily_totals(expenses: &[&Expense]) -> Vec<DailyTotal> {
    let mut by_day = BTreeMap::new();
    for expense in expenses {
        *by_day.entry(expense.date).or_insert(Decimal::ZERO) += expense.amount;
    }
    by_day
        .into_iter()
        .map(|(date, total)| DailyTotal { date, total })
        .collect()
}

/// Flattens breakdown and daily totals into chart series.
pub fn build_chart_data(metrics: &DashboardMetrics) -> ChartData {
    let mut chart = ChartData::default();
    for item in &metrics.category_breakdown {
        chart.category_names.push(item.name.clone());
        chart.category_amounts.push(item.total);
        chart.category_colors.push(item.color.clone());
    }
    for day in &metrics.daily_totals {
        chart.daily_dates.push(day.date.format("%Y-%m-%d").to_string());
        chart.daily_amounts.push(day.total);
    }
    chart
}
