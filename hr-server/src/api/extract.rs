//! Request Extractors
//!
//! Wrappers over axum's `Json`, `Path` and `Query` whose rejections are
//! [`AppError`]s, so a body or parameter that fails to parse still gets the
//! `{code, message, details}` envelope and a 400.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;

use crate::utils::AppError;

/// JSON request body
pub struct AppJson<T>(pub T);

/// Path parameters
pub struct AppPath<T>(pub T);

/// Query string
pub struct AppQuery<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_error)?;
        Ok(Self(value))
    }
}

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::validation("Invalid path parameter").with_detail("reason", e.body_text())
            })?;
        Ok(Self(value))
    }
}

impl<S, T> FromRequestParts<S> for AppQuery<T>
where
    Query<T>: FromRequestParts<S, Rejection = QueryRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::validation("Invalid query string").with_detail("reason", e.body_text())
            })?;
        Ok(Self(value))
    }
}

fn json_error(rejection: JsonRejection) -> AppError {
    let reason = rejection.body_text();
    match rejection {
        JsonRejection::JsonDataError(_) => body_data_error(&reason),
        JsonRejection::JsonSyntaxError(_) => {
            AppError::validation("Malformed JSON body").with_detail("reason", reason)
        }
        JsonRejection::MissingJsonContentType(_) => {
            AppError::validation("Expected Content-Type: application/json")
        }
        _ => AppError::validation("Unreadable request body").with_detail("reason", reason),
    }
}

/// A body that is valid JSON but does not fit the payload type
///
/// serde names a missing field as ``missing field `role` ``; that becomes the
/// usual required-field error. Other mismatches keep serde's text as the reason.
fn body_data_error(reason: &str) -> AppError {
    if let Some(field) = missing_field(reason) {
        return AppError::required(field);
    }
    AppError::validation("Invalid request body").with_detail("reason", reason)
}

fn missing_field(reason: &str) -> Option<&str> {
    const MARKER: &str = "missing field `";
    let start = reason.find(MARKER)? + MARKER.len();
    let rest = &reason[start..];
    let end = rest.find('`')?;
    Some(&rest[..end])
}
