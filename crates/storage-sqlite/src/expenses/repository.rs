use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use hormiga_core::errors::{Error, Result};
use hormiga_core::expenses::{Expense, ExpenseRepositoryTrait, NewExpense};

use super::model::{ExpenseChangesDB, ExpenseDB, NewExpenseDB};
use crate::categories::CategoryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{categories, expenses};
use crate::utils::parse_decimal;

/// Expense storage. Every query is scoped to the owning user.
pub struct ExpenseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ExpenseRepository { pool, writer }
    }

    fn load_owned(conn: &mut SqliteConnection, owner: &str) -> Result<Vec<Expense>> {
        let rows = expenses::table
            .inner_join(categories::table)
            .filter(expenses::user_id.eq(owner))
            .order((
                expenses::date.desc(),
                expenses::created_at.desc(),
                expenses::id.desc(),
            ))
            .select((ExpenseDB::as_select(), CategoryDB::as_select()))
            .load::<(ExpenseDB, CategoryDB)>(conn)
            .map_err(StorageError::from)?;

        Ok(rows
            .into_iter()
            .map(|(expense, category)| expense.into_domain(category))
            .collect())
    }

    fn load_one(conn: &mut SqliteConnection, owner: &str, expense_id: &str) -> Result<Expense> {
        expenses::table
            .inner_join(categories::table)
            .filter(expenses::user_id.eq(owner))
            .filter(expenses::id.eq(expense_id))
            .select((ExpenseDB::as_select(), CategoryDB::as_select()))
            .first::<(ExpenseDB, CategoryDB)>(conn)
            .optional()
            .map_err(StorageError::from)?
            .map(|(expense, category)| expense.into_domain(category))
            .ok_or_else(|| Error::NotFound(format!("Expense {expense_id}")))
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    fn list_expenses(&self, user_id: &str) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        Self::load_owned(&mut conn, user_id)
    }

    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense> {
        let mut conn = get_connection(&self.pool)?;
        Self::load_one(&mut conn, user_id, expense_id)
    }

    fn sum_expenses_between(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal> {
        let mut conn = get_connection(&self.pool)?;
        // Amounts are text, so SQLite's SUM would go through floats.
        let amounts = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .filter(expenses::date.between(start, end))
            .select(expenses::amount)
            .load::<String>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(amounts
            .iter()
            .map(|amount| parse_decimal(amount, "amount"))
            .sum())
    }

    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        let owner = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let row = NewExpenseDB::from_domain(
                    Uuid::now_v7().to_string(),
                    &owner,
                    new_expense,
                    Utc::now().naive_utc(),
                );
                diesel::insert_into(expenses::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Self::load_one(conn, &owner, &row.id)
            })
            .await
    }

    async fn update_expense(
        &self,
        user_id: &str,
        expense_id: &str,
        update: NewExpense,
    ) -> Result<Expense> {
        let owner = user_id.to_string();
        let expense_id = expense_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let changes = ExpenseChangesDB::from_domain(update, Utc::now().naive_utc());
                let affected = diesel::update(
                    expenses::table
                        .filter(expenses::id.eq(&expense_id))
                        .filter(expenses::user_id.eq(&owner)),
                )
                .set(&changes)
                .execute(conn)
                .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(Error::NotFound(format!("Expense {expense_id}")));
                }
                Self::load_one(conn, &owner, &expense_id)
            })
            .await
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize> {
        let owner = user_id.to_string();
        let expense_id = expense_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    expenses::table
                        .filter(expenses::id.eq(expense_id))
                        .filter(expenses::user_id.eq(owner)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
