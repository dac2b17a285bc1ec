//! User domain models.

use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::USERNAME_MAX_LEN;
use crate::errors::{FieldErrors, Result};

lazy_static! {
    static ref USERNAME_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9@.+_-]+$").expect("Invalid regex pattern");
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid regex pattern");
}

/// Domain model representing an account holder. Never carries the password
/// hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_joined: NaiveDateTime,
}

impl User {
    /// "First Last" when either part is set, otherwise the username.
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() {
            self.username.clone()
        } else {
            full
        }
    }
}

/// A user together with the stored password hash, used only for login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Input model for registering a user. The password is hashed before it
/// reaches the core.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: String,
}

/// Editable profile fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

fn clean(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if !EMAIL_REGEX.is_match(email) {
        errors.push("email", "must be a valid email address");
    }
}

impl NewUser {
    pub fn normalized(self) -> Self {
        NewUser {
            username: self.username.trim().to_string(),
            email: clean(self.email).map(|e| e.to_lowercase()),
            first_name: clean(self.first_name),
            last_name: clean(self.last_name),
            password_hash: self.password_hash,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        if self.username.is_empty() {
            errors.push("username", "is required");
        } else if self.username.chars().count() > USERNAME_MAX_LEN {
            errors.push(
                "username",
                format!("must be at most {USERNAME_MAX_LEN} characters"),
            );
        } else if !USERNAME_REGEX.is_match(&self.username) {
            errors.push(
                "username",
                "may contain only letters, digits and @ . + - _",
            );
        }
        if let Some(email) = &self.email {
            check_email(&mut errors, email);
        }
        if self.password_hash.is_empty() {
            errors.push("password", "is required");
        }
        errors.into_result(())
    }
}

impl ProfileUpdate {
    pub fn normalized(self) -> Self {
        ProfileUpdate {
            email: self.email.trim().to_lowercase(),
            first_name: clean(self.first_name),
            last_name: clean(self.last_name),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        if self.email.is_empty() {
            errors.push("email", "is required");
        } else {
            check_email(&mut errors, &self.email);
        }
        errors.into_result(())
    }
}
