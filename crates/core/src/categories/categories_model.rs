//! Category domain models.

use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{CATEGORY_ICON_MAX_LEN, CATEGORY_NAME_MAX_LEN};
use crate::errors::{FieldErrors, Result};

lazy_static! {
    /// `#RRGGBB`
    static ref HEX_COLOR_REGEX: Regex =
        Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid regex pattern");
}

/// Domain model representing an expense category. Categories are shared by
/// every user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating or replacing a category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewCategory {
    /// Trims text fields and drops a blank description.
    pub fn normalized(self) -> Self {
        NewCategory {
            name: self.name.trim().to_string(),
            icon: self.icon.trim().to_string(),
            color: self.color.trim().to_string(),
            description: self
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("name", "is required");
        } else if name.chars().count() > CATEGORY_NAME_MAX_LEN {
            errors.push(
                "name",
                format!("must be at most {CATEGORY_NAME_MAX_LEN} characters"),
            );
        }

        let icon = self.icon.trim();
        if icon.is_empty() {
            errors.push("icon", "is required");
        } else if icon.chars().count() > CATEGORY_ICON_MAX_LEN {
            errors.push(
                "icon",
                format!("must be at most {CATEGORY_ICON_MAX_LEN} characters"),
            );
        }

        if !HEX_COLOR_REGEX.is_match(self.color.trim()) {
            errors.push("color", "must be a hex color like #1A2B3C");
        }

        errors.into_result(())
    }
}
