//! Route definitions for the user resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// User routes.
///
/// ```text
/// POST   /user          -> create
/// GET    /user          -> list
/// GET    /users         -> list
/// GET    /user/{id}     -> get_by_id
/// PUT    /user/{id}     -> update
/// DELETE /user/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user", get(user::list).post(user::create))
        .route("/users", get(user::list))
        .route(
            "/user/{id}",
            get(user::get_by_id).put(user::update).delete(user::delete),
        )
}
