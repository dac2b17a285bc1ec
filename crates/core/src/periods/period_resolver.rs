use chrono::{Datelike, NaiveDate};

use crate::errors::{FieldErrors, Result};
use crate::utils::time_utils::{days_before, first_day_of_month, last_day_of_month};

use super::period_model::{PeriodKey, PeriodRange};

/// Resolves a period key into an inclusive date range relative to `today`.
///
/// Never fails. `Custom` has no bounds of its own and unknown keys both fall
/// back to the current month; callers with explicit bounds use
/// [`custom_period`] instead.
pub fn resolve_period(key: PeriodKey, today: NaiveDate) -> PeriodRange {
    match key {
        PeriodKey::CurrentMonth => PeriodRange {
            key,
            start_date: first_day_of_month(today),
            end_date: today,
            label: format!("This month ({})", today.format("%B %Y")),
        },
        PeriodKey::LastMonth => {
            let end_date = days_before(first_day_of_month(today), 1);
            PeriodRange {
                key,
                start_date: first_day_of_month(end_date),
                end_date: last_day_of_month(end_date),
                label: format!("Last month ({})", end_date.format("%B %Y")),
            }
        }
        PeriodKey::CurrentYear => PeriodRange {
            key,
            start_date: NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
            end_date: today,
            label: format!("This year ({})", today.year()),
        },
        PeriodKey::Last7Days => trailing(key, today, 7, "Last 7 days"),
        PeriodKey::Last30Days => trailing(key, today, 30, "Last 30 days"),
        PeriodKey::Last3Months => trailing(key, today, 90, "Last 3 months"),
        PeriodKey::Last6Months => trailing(key, today, 180, "Last 6 months"),
        PeriodKey::Custom | PeriodKey::Unrecognized => PeriodRange {
            key,
            start_date: first_day_of_month(today),
            end_date: today,
            label: "This month".to_string(),
        },
    }
}

/// Convenience wrapper parsing a raw key first. Unknown strings never error.
pub fn resolve_period_key(raw: &str, today: NaiveDate) -> PeriodRange {
    resolve_period(PeriodKey::parse(raw), today)
}

/// Builds a caller-supplied range. Rejects `start_date > end_date`.
pub fn custom_period(start_date: NaiveDate, end_date: NaiveDate) -> Result<PeriodRange> {
    let mut errors = FieldErrors::new();
    if start_date > end_date {
        errors.push("date_to", "must be on or after date_from");
    }
    errors.into_result(PeriodRange {
        key: PeriodKey::Custom,
        start_date,
        end_date,
        label: format!(
            "Custom range ({} to {})",
            start_date.format("%Y-%m-%d"),
            end_date.format("%Y-%m-%d")
        ),
    })
}

fn trailing(key: PeriodKey, today: NaiveDate, days: i64, label: &str) -> PeriodRange {
    PeriodRange {
        key,
        start_date: days_before(today, days),
        end_date: today,
        label: label.to_string(),
    }
}
