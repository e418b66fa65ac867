use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{error, warn};

use crate::services::{
    address_forms::address_form::AddressFormError,
    address_resolution::address_resolver::ResolveError,
};

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }

    pub fn form_not_found(id: u64) -> Self {
        AppError::new(
            StatusCode::NOT_FOUND,
            &format!("Address form {} not found", id),
        )
    }
}

impl From<AddressFormError> for AppError {
    fn from(e: AddressFormError) -> Self {
        match e {
            AddressFormError::Resolve(ResolveError::NoCandidates) => {
                AppError::new(StatusCode::NOT_FOUND, &e.to_string())
            }
            AddressFormError::Resolve(ResolveError::ServiceUnavailable(ref reason)) => {
                error!("Address lookup failed: {}", reason);
                AppError::new(StatusCode::BAD_GATEWAY, "Address lookup failed")
            }
            AddressFormError::PlaceLookup(ref reason) => {
                error!("Place lookup failed: {}", reason);
                AppError::new(StatusCode::BAD_GATEWAY, "Place lookup failed")
            }
            AddressFormError::Superseded => {
                warn!("Location change superseded before it resolved");
                AppError::new(StatusCode::CONFLICT, &e.to_string())
            }
            AddressFormError::PlaceNotFound => AppError::new(StatusCode::NOT_FOUND, &e.to_string()),
            AddressFormError::Validation(message) => {
                AppError::new(StatusCode::BAD_REQUEST, &message)
            }
        }
    }
}

#[derive(Serialize)]
struct ResponseJson {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ResponseJson {
                message: self.message,
            }),
        )
            .into_response()
    }
}
