//! Users module - account holders, registration and profile management.

mod users_model;
mod users_service;
mod users_traits;

#[cfg(test)]
mod users_service_tests;

pub use users_model::{NewUser, ProfileUpdate, User, UserCredentials};
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
