use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::{FieldErrors, Result};
use crate::expenses::{sort_newest_first, Expense};
use crate::periods::{custom_period, resolve_period, PeriodKey, PeriodRange};
use crate::utils::decimal_utils::amount_problem;

use super::filters_model::{ExpenseFilterInput, FilterCriteria, FilteredExpenses};

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_date(errors: &mut FieldErrors, field: &str, raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?;
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(field, "must be a date in YYYY-MM-DD format");
            None
        }
    }
}

fn parse_amount(errors: &mut FieldErrors, field: &str, raw: Option<&str>) -> Option<Decimal> {
    let raw = raw?;
    let Ok(amount) = Decimal::from_str(raw) else {
        errors.push(field, "must be a number");
        return None;
    };
    if let Some(problem) = amount_problem(amount, true) {
        errors.push(field, problem);
        return None;
    }
    Some(amount)
}

/// Validates raw filter input. All problems are reported together.
pub fn validate_filters(input: &ExpenseFilterInput) -> Result<FilterCriteria> {
    let mut errors = FieldErrors::new();

    let period = present(&input.period).map(PeriodKey::parse);
    let category_id = present(&input.category).map(str::to_string);
    let date_from = parse_date(&mut errors, "date_from", present(&input.date_from));
    let date_to = parse_date(&mut errors, "date_to", present(&input.date_to));
    let min_amount = parse_amount(&mut errors, "min_amount", present(&input.min_amount));
    let max_amount = parse_amount(&mut errors, "max_amount", present(&input.max_amount));

    if let (Some(from), Some(to)) = (date_from, date_to) {
        if from > to {
            errors.push("date_to", "must be on or after date_from");
        }
    }
    if let (Some(min), Some(max)) = (min_amount, max_amount) {
        if min > max {
            errors.push("max_amount", "must be greater than or equal to min_amount");
        }
    }

    errors.into_result(FilterCriteria {
        period,
        category_id,
        date_from,
        date_to,
        min_amount,
        max_amount,
    })
}

/// Applies validated criteria to one user's expenses.
///
/// A predefined period replaces any explicit date bounds. Category and amount
/// bounds compose with whichever date range is in effect.
pub fn apply_filters(
    expenses: Vec<Expense>,
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> FilteredExpenses {
    let period_range: Option<PeriodRange> = match criteria.predefined_period() {
        Some(key) => Some(resolve_period(key, today)),
        None => match (criteria.date_from, criteria.date_to) {
            (Some(from), Some(to)) => custom_period(from, to).ok(),
            _ => None,
        },
    };
    let (lower, upper) = match (&period_range, criteria.predefined_period()) {
        (Some(range), Some(_)) => (Some(range.start_date), Some(range.end_date)),
        _ => (criteria.date_from, criteria.date_to),
    };

    let mut matched: Vec<Expense> = expenses
        .into_iter()
        .filter(|e| lower.is_none_or(|from| e.date >= from))
        .filter(|e| upper.is_none_or(|to| e.date <= to))
        .filter(|e| {
            criteria
                .category_id
                .as_deref()
                .is_none_or(|id| e.category.id == id)
        })
        .filter(|e| criteria.min_amount.is_none_or(|min| e.amount >= min))
        .filter(|e| criteria.max_amount.is_none_or(|max| e.amount <= max))
        .collect();
    sort_newest_first(&mut matched);

    let total_filtered: Decimal = matched.iter().map(|e| e.amount).sum();
    FilteredExpenses {
        count_filtered: matched.len(),
        total_filtered,
        active_period_label: period_range.as_ref().map(|r| r.label.clone()),
        period_range,
        has_active_filters: criteria.is_active(),
        expenses: matched,
    }
}
