use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use hormiga_core::errors::{Error, Result};
use hormiga_core::users::{NewUser, ProfileUpdate, User, UserCredentials, UserRepositoryTrait};

use super::model::{NewUserDB, UserDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{budgets, expenses, users};

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }

    fn load_by_username(&self, username: &str) -> Result<Option<UserDB>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(users::table
            .filter(users::username.eq(username))
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?)
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_user(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        users::table
            .find(user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(User::from)
            .ok_or_else(|| Error::NotFound(format!("User {user_id}")))
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self.load_by_username(username)?.map(User::from))
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let row = users::table
            .filter(users::email.eq(email))
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(User::from))
    }

    fn find_credentials(&self, username: &str) -> Result<Option<UserCredentials>> {
        Ok(self.load_by_username(username)?.map(UserCredentials::from))
    }

    fn list_active_users(&self, since: NaiveDate) -> Result<Vec<User>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = users::table
            .inner_join(budgets::table)
            .inner_join(expenses::table)
            .filter(budgets::email_alerts_enabled.eq(true))
            .filter(expenses::date.ge(since))
            .select(UserDB::as_select())
            .distinct()
            .order(users::username.asc())
            .load::<UserDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let row = NewUserDB::from_domain(
                    Uuid::new_v4().to_string(),
                    new_user,
                    Utc::now().naive_utc(),
                );
                let result_db = diesel::insert_into(users::table)
                    .values(&row)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(result_db))
            })
            .await
    }

    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let result_db = diesel::update(users::table.find(&user_id))
                    .set((
                        users::email.eq(Some(update.email)),
                        users::first_name.eq(update.first_name),
                        users::last_name.eq(update.last_name),
                    ))
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .map_err(StorageError::from)?
                    .ok_or_else(|| Error::NotFound(format!("User {user_id}")))?;
                Ok(User::from(result_db))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budgets::BudgetRepository;
    use crate::expenses::ExpenseRepository;
    use crate::test_support::{insert_user, test_db};
    use hormiga_core::budgets::{BudgetRepositoryTrait, BudgetSettings};
    use hormiga_core::errors::DatabaseError;
    use hormiga_core::expenses::{ExpenseRepositoryTrait, NewExpense};
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[tokio::test]
    async fn test_lookups_and_credentials() {
        let db = test_db();
        let ana = insert_user(&db, "ana", Some("ana@example.com")).await;
        let repo = UserRepository::new(Arc::clone(&db.pool), db.writer.clone());

        assert_eq!(repo.get_user(&ana.id).unwrap(), ana);
        assert_eq!(repo.find_by_username("ana").unwrap(), Some(ana.clone()));
        assert_eq!(
            repo.find_by_email("ana@example.com").unwrap().map(|u| u.id),
            Some(ana.id.clone())
        );
        assert_eq!(repo.find_by_username("nobody").unwrap(), None);
        assert_eq!(
            repo.find_credentials("ana").unwrap().unwrap().password_hash,
            "hash"
        );
        assert!(repo.get_user("missing").unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_a_unique_violation() {
        let db = test_db();
        insert_user(&db, "ana", None).await;
        let repo = UserRepository::new(Arc::clone(&db.pool), db.writer.clone());

        let err = repo
            .create_user(NewUser {
                username: "ana".to_string(),
                email: None,
                first_name: None,
                last_name: None,
                password_hash: "other".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Database(DatabaseError::UniqueViolation(_))
        ));
    }

    #[tokio::test]
    async fn test_update_profile() {
        let db = test_db();
        let ana = insert_user(&db, "ana", None).await;
        let repo = UserRepository::new(Arc::clone(&db.pool), db.writer.clone());

        let updated = repo
            .update_profile(
                &ana.id,
                ProfileUpdate {
                    email: "ana@example.com".to_string(),
                    first_name: Some("Ana".to_string()),
                    last_name: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.email.as_deref(), Some("ana@example.com"));
        assert_eq!(updated.first_name.as_deref(), Some("Ana"));
    }

    #[tokio::test]
    async fn test_active_users_need_alerts_and_recent_expenses() {
        let db = test_db();
        let expenses = ExpenseRepository::new(Arc::clone(&db.pool), db.writer.clone());
        let budgets = BudgetRepository::new(Arc::clone(&db.pool), db.writer.clone());
        let repo = UserRepository::new(Arc::clone(&db.pool), db.writer.clone());

        let zoe = insert_user(&db, "zoe", None).await;
        let ana = insert_user(&db, "ana", None).await;
        let muted = insert_user(&db, "muted", None).await;
        let stale = insert_user(&db, "stale", None).await;

        for (user, alerts) in [(&zoe, true), (&ana, true), (&muted, false), (&stale, true)] {
            budgets
                .upsert_budget(
                    &user.id,
                    BudgetSettings {
                        monthly_limit: dec!(100),
                        warning_percentage: 75,
                        critical_percentage: 90,
                        email_alerts_enabled: alerts,
                    },
                )
                .await
                .unwrap();
        }
        for (user, day) in [
            (&zoe, d(2024, 3, 10)),
            (&ana, d(2024, 3, 12)),
            (&ana, d(2024, 3, 13)),
            (&muted, d(2024, 3, 12)),
            (&stale, d(2024, 1, 2)),
        ] {
            expenses
                .create_expense(
                    &user.id,
                    NewExpense {
                        category_id: "coffee".to_string(),
                        amount: dec!(4),
                        date: day,
                        description: None,
                        location: None,
                    },
                )
                .await
                .unwrap();
        }

        let active: Vec<String> = repo
            .list_active_users(d(2024, 3, 1))
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(active, vec!["ana", "zoe"]);
    }
}
