//! Route definitions for the activity resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::activity;
use crate::state::AppState;

/// Activity routes.
///
/// ```text
/// POST   /activity          -> create
/// GET    /activity          -> list
/// GET    /activities        -> list
/// GET    /activity/{id}     -> get_by_id
/// PUT    /activity/{id}     -> update
/// DELETE /activity/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/activity", get(activity::list).post(activity::create))
        .route("/activities", get(activity::list))
        .route(
            "/activity/{id}",
            get(activity::get_by_id)
                .put(activity::update)
                .delete(activity::delete),
        )
}
