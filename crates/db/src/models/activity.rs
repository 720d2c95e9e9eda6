//! Activity entity model and DTOs.

use bucketlist_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An activity row from the `activities` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Activity {
    pub id: DbId,
    pub name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub cost: Option<f64>,
    pub complete: Option<bool>,
}

/// DTO for creating or replacing an activity.
///
/// Every key must be present in the payload. The nullable columns accept an
/// explicit `null`, but an absent key is a decoding error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateActivity {
    pub name: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub location: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub description: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub cost: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub complete: Option<bool>,
}

/// PUT replaces all five columns, so it takes the full create payload.
pub type UpdateActivity = CreateActivity;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_payload_decodes() {
        let input: CreateActivity = serde_json::from_value(json!({
            "name": "Hike",
            "location": "Trailhead",
            "description": "Morning hike",
            "cost": 0,
            "complete": false,
        }))
        .unwrap();

        assert_eq!(input.name, "Hike");
        assert_eq!(input.cost, Some(0.0));
        assert_eq!(input.complete, Some(false));
    }

    #[test]
    fn explicit_null_is_accepted_for_optional_columns() {
        let input: CreateActivity = serde_json::from_value(json!({
            "name": "Read",
            "location": null,
            "description": null,
            "cost": null,
            "complete": null,
        }))
        .unwrap();

        assert_eq!(input.location, None);
        assert_eq!(input.cost, None);
    }

    #[test]
    fn absent_key_is_rejected() {
        let err = serde_json::from_value::<CreateActivity>(json!({
            "name": "Swim",
            "location": "Pool",
            "description": "Laps",
            "cost": 4.5,
        }))
        .unwrap_err();

        assert!(err.to_string().contains("missing field `complete`"), "{err}");
    }

    #[test]
    fn null_name_is_rejected() {
        let result = serde_json::from_value::<CreateActivity>(json!({
            "name": null,
            "location": null,
            "description": null,
            "cost": null,
            "complete": null,
        }));

        assert!(result.is_err());
    }

    #[test]
    fn serializes_allowlisted_fields_only() {
        let activity = Activity {
            id: 1,
            name: "Hike".into(),
            location: Some("Trailhead".into()),
            description: Some("Morning hike".into()),
            cost: Some(0.0),
            complete: Some(false),
        };

        let value = serde_json::to_value(&activity).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            ["complete", "cost", "description", "id", "location", "name"]
        );
    }
}
