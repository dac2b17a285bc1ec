//! Temp-file databases for repository tests.

use std::sync::Arc;
use tempfile::{tempdir, TempDir};

use hormiga_core::users::{NewUser, User, UserRepositoryTrait};

use crate::db::{create_pool, run_migrations, spawn_writer, DbPool, WriteHandle};
use crate::users::UserRepository;

pub struct TestDb {
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
    _dir: TempDir,
}

/// Migrated database in a fresh temp directory. Must run inside a Tokio
/// runtime because the writer actor is spawned.
pub fn test_db() -> TestDb {
    let dir = tempdir().expect("Failed to create temp directory");
    let db_path = dir.path().join("test.db").to_string_lossy().to_string();
    let pool = create_pool(&db_path).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    let writer = spawn_writer((*pool).clone());
    TestDb {
        pool,
        writer,
        _dir: dir,
    }
}

pub async fn insert_user(db: &TestDb, username: &str, email: Option<&str>) -> User {
    UserRepository::new(Arc::clone(&db.pool), db.writer.clone())
        .create_user(NewUser {
            username: username.to_string(),
            email: email.map(str::to_string),
            first_name: None,
            last_name: None,
            password_hash: "hash".to_string(),
        })
        .await
        .expect("Failed to create user")
}
