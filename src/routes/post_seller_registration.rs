use crate::{
    types::coordinate::Coordinate,
    utils::{app_error::AppError, validated_json::ValidatedJson},
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

// Missing fields deserialize as empty so they fail validation with the form's own messages.
#[derive(Validate, Deserialize, Default)]
#[serde(default)]
pub struct PostSellerRegistrationPayload {
    #[validate(length(min = 1, message = "Please enter your full name"))]
    pub full_name: String,

    #[validate(
        length(min = 1, message = "Please enter your email"),
        email(message = "Invalid email format")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Please create a password"))]
    pub password: String,

    #[validate(length(min = 1, message = "Please enter your contact number"))]
    pub contact_number: String,

    #[validate(length(min = 1, message = "Please enter your business name"))]
    pub business_name: String,

    #[validate(length(min = 1, message = "Please enter your business address"))]
    pub business_address: String,

    pub business_location: Option<Coordinate>,
}

#[derive(Serialize, Deserialize)]
pub struct PostSellerRegistrationResponseData {
    pub full_name: String,
    pub email: String,
    pub contact_number: String,
    pub business_name: String,
    pub business_address: String,
    pub business_location: Option<Coordinate>,
    pub received_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
pub struct PostSellerRegistrationResponse {
    pub data: PostSellerRegistrationResponseData,
}

pub async fn post_seller_registration(
    ValidatedJson(payload): ValidatedJson<PostSellerRegistrationPayload>,
) -> Result<Response, AppError> {
    if let Some(location) = payload.business_location {
        if !location.within_bounds() {
            return Err(AppError::new(
                StatusCode::BAD_REQUEST,
                "Business location is not a valid coordinate",
            ));
        }
    }

    let PostSellerRegistrationPayload {
        full_name,
        email,
        password: _,
        contact_number,
        business_name,
        business_address,
        business_location,
    } = payload;

    info!(
        "Seller registration received for {} ({}) at {}",
        business_name, email, business_address
    );

    Ok((
        StatusCode::CREATED,
        Json(PostSellerRegistrationResponse {
            data: PostSellerRegistrationResponseData {
                full_name,
                email,
                contact_number,
                business_name,
                business_address,
                business_location,
                received_at: Utc::now(),
            },
        }),
    )
        .into_response())
}
