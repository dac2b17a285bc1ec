use crate::errors::Result;
use crate::users::users_model::{NewUser, ProfileUpdate, User, UserCredentials};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn find_by_username(&self, username: &str) -> Result<Option<User>>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    fn find_credentials(&self, username: &str) -> Result<Option<UserCredentials>>;
    /// Distinct users with a budget, email alerts enabled and at least one
    /// expense dated on or after `since`, ordered by username.
    fn list_active_users(&self, since: NaiveDate) -> Result<Vec<User>>;
    async fn create_user(&self, new_user: NewUser) -> Result<User>;
    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn find_credentials(&self, username: &str) -> Result<Option<UserCredentials>>;
    async fn register(&self, new_user: NewUser) -> Result<User>;
    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User>;
}
