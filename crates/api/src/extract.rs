//! Request boundary: typed JSON bodies and id path segments.

use std::convert::Infallible;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use bucketlist_core::error::CoreError;
use bucketlist_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor whose rejection is an [`AppError`].
///
/// Drop-in replacement for `Json<T>`. A body that parses as JSON but does
/// not fit `T` (absent key, wrong type) becomes [`CoreError::MissingField`];
/// unparseable JSON or a wrong content type becomes a plain bad request.
pub struct RequiredJson<T>(pub T);

impl<T, S> FromRequest<S> for RequiredJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(RequiredJson(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            AppError::Core(CoreError::MissingField(err.body_text()))
        }
        other => AppError::BadRequest(other.body_text()),
    }
}

/// The `{id}` path segment as a string, never rejected.
///
/// When the segment does not percent-decode to UTF-8, the still-encoded
/// segment is taken from the URI instead, so [`resolve_id`] always gets to
/// report it as not found.
pub struct IdSegment(pub String);

impl<S> FromRequestParts<S> for IdSegment
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => Ok(IdSegment(raw)),
            Err(rejection) => {
                let raw = last_segment(parts.uri.path()).to_string();
                tracing::debug!(segment = %raw, error = %rejection, "Undecodable id segment");
                Ok(IdSegment(raw))
            }
        }
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

/// Resolve a raw `{id}` path segment.
///
/// Anything that is not an integer cannot name a row, so it is reported as
/// not found rather than as a malformed request.
pub fn resolve_id(entity: &'static str, raw: &str) -> Result<DbId, CoreError> {
    raw.parse::<DbId>()
        .map_err(|_| CoreError::not_found(entity, raw))
}
