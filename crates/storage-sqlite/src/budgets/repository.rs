use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use hormiga_core::budgets::{Budget, BudgetRepositoryTrait, BudgetSettings};
use hormiga_core::errors::Result;

use super::model::BudgetDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::budgets;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BudgetRepository { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn get_budget(&self, user_id: &str) -> Result<Option<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let row = budgets::table
            .find(user_id)
            .select(BudgetDB::as_select())
            .first::<BudgetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Budget::from))
    }

    async fn upsert_budget(&self, user_id: &str, settings: BudgetSettings) -> Result<Budget> {
        let owner = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let row = BudgetDB::from_settings(&owner, &settings, Utc::now().naive_utc());
                // created_at is left alone on conflict so the original stays.
                let result_db = diesel::insert_into(budgets::table)
                    .values(&row)
                    .on_conflict(budgets::user_id)
                    .do_update()
                    .set((
                        budgets::monthly_limit.eq(&row.monthly_limit),
                        budgets::warning_percentage.eq(row.warning_percentage),
                        budgets::critical_percentage.eq(row.critical_percentage),
                        budgets::email_alerts_enabled.eq(row.email_alerts_enabled),
                        budgets::updated_at.eq(row.updated_at),
                    ))
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Budget::from(result_db))
            })
            .await
    }

    async fn delete_budget(&self, user_id: &str) -> Result<usize> {
        let owner = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(budgets::table.find(owner))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
