//! User entity model and DTOs.

use bucketlist_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user row from the `users` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

/// DTO for creating or replacing a user. All four keys are required; `null`
/// is a valid value for each.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateUser {
    #[serde(deserialize_with = "Option::deserialize")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub email: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub photo_url: Option<String>,
}

pub type UpdateUser = CreateUser;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_string_is_kept_as_a_value() {
        let input: CreateUser = serde_json::from_value(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "photo_url": "",
        }))
        .unwrap();

        assert_eq!(input.photo_url.as_deref(), Some(""));
    }

    #[test]
    fn absent_key_is_rejected() {
        let err = serde_json::from_value::<CreateUser>(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
        }))
        .unwrap_err();

        assert!(err.to_string().contains("missing field `photo_url`"), "{err}");
    }
}
