//! Handlers for the user resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bucketlist_core::error::CoreError;
use bucketlist_db::models::user::{CreateUser, UpdateUser, User};
use bucketlist_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{resolve_id, IdSegment, RequiredJson};
use crate::state::AppState;

const ENTITY: &str = "User";

/// POST /user
pub async fn create(
    State(state): State<AppState>,
    RequiredJson(input): RequiredJson<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = UserRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users (also GET /user)
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// GET /user/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdSegment(raw_id): IdSegment,
) -> AppResult<Json<User>> {
    let id = resolve_id(ENTITY, &raw_id)?;
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(user))
}

/// PUT /user/{id}
pub async fn update(
    State(state): State<AppState>,
    IdSegment(raw_id): IdSegment,
    body: Result<RequiredJson<UpdateUser>, AppError>,
) -> AppResult<Json<User>> {
    let id = resolve_id(ENTITY, &raw_id)?;
    if UserRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(CoreError::not_found(ENTITY, id).into());
    }
    let RequiredJson(input) = body?;

    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    tracing::info!(user_id = id, "User updated");

    Ok(Json(user))
}

/// DELETE /user/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdSegment(raw_id): IdSegment,
) -> AppResult<Json<User>> {
    let id = resolve_id(ENTITY, &raw_id)?;
    let user = UserRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    tracing::info!(user_id = id, "User deleted");

    Ok(Json(user))
}
