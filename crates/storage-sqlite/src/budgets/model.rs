//! Database models for budgets.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use hormiga_core::budgets::{Budget, BudgetSettings};

use crate::utils::{format_decimal, parse_decimal};

/// Database model for budgets. One row per user, keyed by `user_id`.
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(primary_key(user_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetDB {
    pub user_id: String,
    pub monthly_limit: String,
    pub warning_percentage: i32,
    pub critical_percentage: i32,
    pub email_alerts_enabled: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl BudgetDB {
    pub fn from_settings(user_id: &str, settings: &BudgetSettings, now: NaiveDateTime) -> Self {
        Self {
            user_id: user_id.to_string(),
            monthly_limit: format_decimal(settings.monthly_limit),
            warning_percentage: settings.warning_percentage,
            critical_percentage: settings.critical_percentage,
            email_alerts_enabled: settings.email_alerts_enabled,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<BudgetDB> for Budget {
    fn from(db: BudgetDB) -> Self {
        Self {
            monthly_limit: parse_decimal(&db.monthly_limit, "monthly_limit"),
            user_id: db.user_id,
            warning_percentage: db.warning_percentage,
            critical_percentage: db.critical_percentage,
            email_alerts_enabled: db.email_alerts_enabled,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
