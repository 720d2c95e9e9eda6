pub mod activity;
pub mod health;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /activity                 list, create
/// /activities               list
/// /activity/{id}            get, update, delete
///
/// /user                     list, create
/// /users                    list
/// /user/{id}                get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(activity::router())
        .merge(user::router())
}
