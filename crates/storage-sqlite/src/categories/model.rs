//! Database models for categories.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use hormiga_core::categories::{Category, NewCategory};

/// Database model for categories
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryDB {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new category
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategoryDB {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewCategoryDB {
    pub fn from_domain(id: String, input: NewCategory, now: NaiveDateTime) -> Self {
        Self {
            id,
            name: input.name,
            icon: input.icon,
            color: input.color,
            description: input.description,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<CategoryDB> for Category {
    fn from(db: CategoryDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            icon: db.icon,
            color: db.color,
            description: db.description,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
