//! Handlers for the activity resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bucketlist_core::error::CoreError;
use bucketlist_db::models::activity::{Activity, CreateActivity, UpdateActivity};
use bucketlist_db::repositories::ActivityRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{resolve_id, IdSegment, RequiredJson};
use crate::state::AppState;

const ENTITY: &str = "Activity";

/// POST /activity
pub async fn create(
    State(state): State<AppState>,
    RequiredJson(input): RequiredJson<CreateActivity>,
) -> AppResult<(StatusCode, Json<Activity>)> {
    let activity = ActivityRepo::create(&state.pool, &input).await?;

    tracing::info!(activity_id = activity.id, name = %activity.name, "Activity created");

    Ok((StatusCode::CREATED, Json(activity)))
}

/// GET /activities (also GET /activity)
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Activity>>> {
    let activities = ActivityRepo::list(&state.pool).await?;
    Ok(Json(activities))
}

/// GET /activity/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdSegment(raw_id): IdSegment,
) -> AppResult<Json<Activity>> {
    let id = resolve_id(ENTITY, &raw_id)?;
    let activity = ActivityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(activity))
}

/// PUT /activity/{id}
///
/// The row is looked up before the body is inspected, so an unknown id
/// reports not-found even when the payload is incomplete.
pub async fn update(
    State(state): State<AppState>,
    IdSegment(raw_id): IdSegment,
    body: Result<RequiredJson<UpdateActivity>, AppError>,
) -> AppResult<Json<Activity>> {
    let id = resolve_id(ENTITY, &raw_id)?;
    if ActivityRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(CoreError::not_found(ENTITY, id).into());
    }
    let RequiredJson(input) = body?;

    let activity = ActivityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    tracing::info!(activity_id = id, "Activity updated");

    Ok(Json(activity))
}

/// DELETE /activity/{id}
///
/// Responds with the removed row.
pub async fn delete(
    State(state): State<AppState>,
    IdSegment(raw_id): IdSegment,
) -> AppResult<Json<Activity>> {
    let id = resolve_id(ENTITY, &raw_id)?;
    let activity = ActivityRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    tracing::info!(activity_id = id, "Activity deleted");

    Ok(Json(activity))
}
