use std::error::Error;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::app_error::AppError;

pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| match e.source() {
                Some(source) => AppError::new(
                    StatusCode::BAD_REQUEST,
                    &format!("Invalid query: {}", source),
                ),
                None => AppError::new(StatusCode::BAD_REQUEST, &e.body_text()),
            })?;

        data.validate().map_err(|e| {
            AppError::new(StatusCode::BAD_REQUEST, &format!("Invalid query: {}", e))
        })?;

        Ok(ValidatedQuery(data))
    }
}
