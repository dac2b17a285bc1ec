use chrono::{Datelike, Duration, Local, NaiveDate};

/// Today's calendar date in the server's local timezone.
///
/// Services never call this themselves; the HTTP layer resolves "today" once
/// per request and passes it down so every computation is reproducible.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// First calendar day of the month containing `date`.
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last calendar day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// `date` shifted back by `days`, saturating at the earliest representable date.
pub fn days_before(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_sub_signed(Duration::days(days))
        .unwrap_or(NaiveDate::MIN)
}

/// Number of days in the inclusive range, 0 when `start > end`.
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    if start > end {
        0
    } else {
        (end - start).num_days() + 1
    }
}

/// Month index used for month arithmetic (`year * 12 + month`).
pub fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month())
}

/// "YYYY-MM" key for the month containing `date`.
pub fn month_key(date: NaiveDate) -> String {
    format!("{}-{:02}", date.year(), date.month())
}
