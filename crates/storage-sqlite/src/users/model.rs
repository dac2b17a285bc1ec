//! Database models for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use hormiga_core::users::{NewUser, User, UserCredentials};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: String,
    pub date_joined: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: String,
    pub date_joined: NaiveDateTime,
}

impl NewUserDB {
    pub fn from_domain(id: String, input: NewUser, now: NaiveDateTime) -> Self {
        Self {
            id,
            username: input.username,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            password_hash: input.password_hash,
            date_joined: now,
        }
    }
}

impl From<UserDB> for UserCredentials {
    fn from(db: UserDB) -> Self {
        Self {
            password_hash: db.password_hash,
            user: User {
                id: db.id,
                username: db.username,
                email: db.email,
                first_name: db.first_name,
                last_name: db.last_name,
                date_joined: db.date_joined,
            },
        }
    }
}

// The hash never leaves storage unless credentials were asked for.
impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        UserCredentials::from(db).user
    }
}
