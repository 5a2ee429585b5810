//! JSON body extractor that runs [`Validate`] before the handler

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::schema::Validate;

/// Deserialized and validated request body
///
/// Shape errors are rejected by serde, constraint errors by [`Validate`];
/// either way the handler never runs.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate().map_err(ApiError::Validation)?;
        Ok(Self(value))
    }
}
