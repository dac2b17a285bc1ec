use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::expenses::{sort_newest_first, Expense};
use crate::utils::decimal_utils::percentage_of;
use crate::utils::time_utils::{month_index, month_key};

use super::reports_model::{CategorySummary, ExpenseHistory, MonthlySummary, ReportExpense};

/// Assembles the historical report from one user's full expense list.
pub fn build_expense_history(expenses: &[Expense]) -> ExpenseHistory {
    if expenses.is_empty() {
        return ExpenseHistory::default();
    }

    let mut ordered = expenses.to_vec();
    sort_newest_first(&mut ordered);

    let first = ordered.iter().map(|e| e.date).min();
    let last = ordered.iter().map(|e| e.date).max();
    let total_months_active = match (first, last) {
        (Some(first), Some(last)) => month_index(last) - month_index(first) + 1,
        _ => 0,
    };

    let mut total = Decimal::ZERO;
    let mut monthly_summaries: BTreeMap<String, MonthlySummary> = BTreeMap::new();
    let mut category_summary: BTreeMap<String, CategorySummary> = BTreeMap::new();

    for expense in &ordered {
        total += expense.amount;

        let month = monthly_summaries.entry(month_key(expense.date)).or_default();
        month.total += expense.amount;
        month.count += 1;
        *month
            .categories
            .entry(expense.category.name.clone())
            .or_insert(Decimal::ZERO) += expense.amount;

        let category = category_summary
            .entry(expense.category.name.clone())
            .or_default();
        category.total += expense.amount;
        category.count += 1;
    }

    for summary in category_summary.values_mut() {
        summary.percentage = percentage_of(summary.total, total);
    }

    ExpenseHistory {
        first_expense_date: first,
        last_expense_date: last,
        total_months_active,
        total_expense_amount: total,
        total_expense_count: ordered.len(),
        all_expenses: ordered.iter().map(ReportExpense::from).collect(),
        monthly_summaries,
        category_summary,
    }
}
