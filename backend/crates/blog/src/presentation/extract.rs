//! Request Extractors

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use platform::bearer::extract_bearer_token;
use serde::de::DeserializeOwned;

use crate::error::BlogError;
use crate::presentation::validation::Validate;

/// JSON body that has passed its field rules
///
/// Unparseable bodies become `MalformedRequest` with the parser's text as
/// details; rule failures become `Validation`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = BlogError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| BlogError::MalformedRequest(rejection.body_text()))?;

        value.validate()?;
        Ok(Self(value))
    }
}

/// Path parameter that renders parse failures as `MalformedRequest`
#[derive(Debug, Clone)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = BlogError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| BlogError::MalformedRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Query string that renders parse failures as `MalformedRequest`
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = BlogError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| BlogError::MalformedRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Raw credential from `Authorization: Bearer <token>`
///
/// A missing header or another scheme is rejected with 401; the token
/// itself is not checked here.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = BlogError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_bearer_token(&parts.headers)
            .map(Self)
            .ok_or(BlogError::Unauthorized)
    }
}
