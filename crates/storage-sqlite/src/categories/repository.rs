use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use hormiga_core::categories::{Category, CategoryRepositoryTrait, NewCategory};
use hormiga_core::errors::{Error, Result};

use super::model::{CategoryDB, NewCategoryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{categories, expenses};

pub struct CategoryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CategoryRepository { pool, writer }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    fn list_categories(&self) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = categories::table
            .order(categories::name.asc())
            .select(CategoryDB::as_select())
            .load::<CategoryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    fn get_category(&self, category_id: &str) -> Result<Category> {
        let mut conn = get_connection(&self.pool)?;
        categories::table
            .find(category_id)
            .select(CategoryDB::as_select())
            .first::<CategoryDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(Category::from)
            .ok_or_else(|| Error::NotFound(format!("Category {category_id}")))
    }

    fn count_expenses_for_category(&self, category_id: &str) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Ok(expenses::table
            .filter(expenses::category_id.eq(category_id))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?)
    }

    async fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let row = NewCategoryDB::from_domain(
                    Uuid::new_v4().to_string(),
                    new_category,
                    Utc::now().naive_utc(),
                );
                let result_db = diesel::insert_into(categories::table)
                    .values(&row)
                    .returning(CategoryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Category::from(result_db))
            })
            .await
    }

    async fn update_category(&self, category_id: &str, update: NewCategory) -> Result<Category> {
        let category_id = category_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let now = Utc::now().naive_utc();
                let result_db = diesel::update(categories::table.find(&category_id))
                    .set((
                        categories::name.eq(update.name),
                        categories::icon.eq(update.icon),
                        categories::color.eq(update.color),
                        categories::description.eq(update.description),
                        categories::updated_at.eq(now),
                    ))
                    .returning(CategoryDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .map_err(StorageError::from)?
                    .ok_or_else(|| Error::NotFound(format!("Category {category_id}")))?;
                Ok(Category::from(result_db))
            })
            .await
    }

    async fn delete_category(&self, category_id: &str) -> Result<usize> {
        let category_id = category_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(categories::table.find(category_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
