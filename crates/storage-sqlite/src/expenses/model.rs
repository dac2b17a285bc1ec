//! Database models for expenses.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use hormiga_core::categories::Category;
use hormiga_core::expenses::{Expense, NewExpense};

use crate::categories::CategoryDB;
use crate::utils::{format_decimal, parse_decimal};

/// Database model for expenses. Amounts are stored as decimal text.
#[derive(Queryable, Identifiable, Selectable, Associations, PartialEq, Debug, Clone)]
#[diesel(belongs_to(CategoryDB, foreign_key = category_id))]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseDB {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub amount: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub location: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new expense
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
pub struct NewExpenseDB {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub amount: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub location: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Column values rewritten by an update. `None` clears optional columns.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(treat_none_as_null = true)]
pub struct ExpenseChangesDB {
    pub category_id: String,
    pub amount: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub location: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl NewExpenseDB {
    pub fn from_domain(id: String, user_id: &str, input: NewExpense, now: NaiveDateTime) -> Self {
        Self {
            id,
            user_id: user_id.to_string(),
            category_id: input.category_id,
            amount: format_decimal(input.amount),
            date: input.date,
            description: input.description,
            location: input.location,
            created_at: now,
            updated_at: now,
        }
    }
}

impl ExpenseChangesDB {
    pub fn from_domain(input: NewExpense, now: NaiveDateTime) -> Self {
        Self {
            category_id: input.category_id,
            amount: format_decimal(input.amount),
            date: input.date,
            description: input.description,
            location: input.location,
            updated_at: now,
        }
    }
}

impl ExpenseDB {
    pub fn into_domain(self, category: CategoryDB) -> Expense {
        Expense {
            amount: parse_decimal(&self.amount, "amount"),
            id: self.id,
            user_id: self.user_id,
            category: Category::from(category),
            date: self.date,
            description: self.description,
            location: self.location,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
