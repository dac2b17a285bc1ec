use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use crate::errors::{Error, FieldError, FieldErrors, Result, ValidationError};

use super::users_model::{NewUser, ProfileUpdate, User, UserCredentials};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.get_user(user_id)
    }

    fn find_credentials(&self, username: &str) -> Result<Option<UserCredentials>> {
        self.repository.find_credentials(username.trim())
    }

    async fn register(&self, new_user: NewUser) -> Result<User> {
        let new_user = new_user.normalized();
        new_user.validate()?;

        let mut errors = FieldErrors::new();
        if self.repository.find_by_username(&new_user.username)?.is_some() {
            errors.push("username", "is already taken");
        }
        if let Some(email) = &new_user.email {
            if self.repository.find_by_email(email)?.is_some() {
                errors.push("email", "is already registered");
            }
        }
        errors.into_result(())?;

        let user = self.repository.create_user(new_user).await?;
        info!("Registered user {} ({})", user.username, user.id);
        Ok(user)
    }

    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User> {
        let update = update.normalized();
        update.validate()?;

        let taken = self
            .repository
            .find_by_email(&update.email)?
            .is_some_and(|other| other.id != user_id);
        if taken {
            return Err(Error::Validation(ValidationError::Fields(vec![
                FieldError::new("email", "is already used by another account"),
            ])));
        }

        self.repository.update_profile(user_id, update).await
    }
}
