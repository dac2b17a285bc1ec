//! Period domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic identifier selecting a predefined date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PeriodKey {
    #[default]
    #[serde(rename = "current_month")]
    CurrentMonth,
    #[serde(rename = "last_month")]
    LastMonth,
    #[serde(rename = "current_year")]
    CurrentYear,
    #[serde(rename = "last_7_days")]
    Last7Days,
    #[serde(rename = "last_30_days")]
    Last30Days,
    #[serde(rename = "last_3_months")]
    Last3Months,
    #[serde(rename = "last_6_months")]
    Last6Months,
    #[serde(rename = "custom")]
    Custom,
    /// Any key outside the closed set. Resolves like `CurrentMonth`.
    #[serde(rename = "unrecognized")]
    Unrecognized,
}

impl PeriodKey {
    pub const PREDEFINED: [PeriodKey; 7] = [
        PeriodKey::CurrentMonth,
        PeriodKey::LastMonth,
        PeriodKey::CurrentYear,
        PeriodKey::Last7Days,
        PeriodKey::Last30Days,
        PeriodKey::Last3Months,
        PeriodKey::Last6Months,
    ];

    /// Parses a key. Never fails: unknown strings map to `Unrecognized`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "current_month" => PeriodKey::CurrentMonth,
            "last_month" => PeriodKey::LastMonth,
            "current_year" => PeriodKey::CurrentYear,
            "last_7_days" => PeriodKey::Last7Days,
            "last_30_days" => PeriodKey::Last30Days,
            "last_3_months" => PeriodKey::Last3Months,
            "last_6_months" => PeriodKey::Last6Months,
            "custom" => PeriodKey::Custom,
            _ => PeriodKey::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodKey::CurrentMonth => "current_month",
            PeriodKey::LastMonth => "last_month",
            PeriodKey::CurrentYear => "current_year",
            PeriodKey::Last7Days => "last_7_days",
            PeriodKey::Last30Days => "last_30_days",
            PeriodKey::Last3Months => "last_3_months",
            PeriodKey::Last6Months => "last_6_months",
            PeriodKey::Custom => "custom",
            PeriodKey::Unrecognized => "unrecognized",
        }
    }

    /// True for keys that select a range on their own (everything but `Custom`).
    pub fn is_predefined(&self) -> bool {
        !matches!(self, PeriodKey::Custom)
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete, inclusive date range with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRange {
    pub key: PeriodKey,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub label: String,
}

impl PeriodRange {
    /// True if `date` falls inside the range, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
