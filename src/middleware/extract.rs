use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::TriviaError;
use crate::pagination::{PageNumber, PageParams};

/// JSON body whose rejections render as the standard 400 body.
pub struct TriviaJson<T>(pub T);

impl<S, T> FromRequest<S> for TriviaJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(TriviaError::bad_request(rejection.body_text())),
        }
    }
}

/// `?page=` as a [`PageNumber`]; anything unparsable is page 1.
#[derive(Debug, Clone, Copy)]
pub struct Page(pub PageNumber);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = match Query::<PageParams>::try_from_uri(&parts.uri) {
            Ok(Query(params)) => params,
            Err(rejection) => {
                debug!(error = %rejection, "ignoring malformed page query");
                PageParams::default()
            }
        };
        Ok(Self(params.into()))
    }
}

/// Integer `{id}` path segment. A non-integer id names nothing, so it is a 404.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => Err(TriviaError::not_found("path", rejection.body_text())),
        }
    }
}
