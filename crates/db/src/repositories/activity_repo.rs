//! Repository for the `activities` table.

use bucketlist_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::activity::{Activity, CreateActivity, UpdateActivity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, location, description, cost, complete";

/// Provides CRUD operations for activities.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Insert a new activity, returning the created row.
    ///
    /// Fails with a unique-violation database error if `name` is taken.
    pub async fn create(pool: &SqlitePool, input: &CreateActivity) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities (name, location, description, cost, complete)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.description)
            .bind(input.cost)
            .bind(input.complete)
            .fetch_one(pool)
            .await
    }

    /// Find an activity by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities WHERE id = ?1");
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all activities in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities ORDER BY id");
        sqlx::query_as::<_, Activity>(&query).fetch_all(pool).await
    }

    /// Overwrite every column of an activity.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateActivity,
    ) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!(
            "UPDATE activities SET
                name = ?2,
                location = ?3,
                description = ?4,
                cost = ?5,
                complete = ?6
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.description)
            .bind(input.cost)
            .bind(input.complete)
            .fetch_optional(pool)
            .await
    }

    /// Delete an activity, returning the row as it was before removal.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!("DELETE FROM activities WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
