use crate::{
    types::{
        address_form_response::AddressFormResponse, app_state::AppState, coordinate::Coordinate,
        map_view::ADDRESS_FORM_ZOOM,
    },
    utils::{app_error::AppError, validated_json::ValidatedJson},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use validator::Validate;

/// `lat`/`lng` carry the user's location when the client could obtain it.
#[derive(Validate, Deserialize)]
pub struct PostAddressFormPayload {
    #[validate(range(min = -90.0, max = 90.0, message = "Must be a valid latitude"))]
    pub lat: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Must be a valid longitude"))]
    pub lng: Option<f64>,

    #[validate(range(min = 1, max = 21, message = "Must be between 1 and 21"))]
    pub zoom: Option<u8>,
}

pub async fn post_address_form(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PostAddressFormPayload>,
) -> Result<Response, AppError> {
    let user_location = match (payload.lat, payload.lng) {
        (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng).map_err(|e| {
            AppError::new(StatusCode::BAD_REQUEST, &e.to_string())
        })?),
        (None, None) => None,
        _ => {
            return Err(AppError::new(
                StatusCode::BAD_REQUEST,
                "lat and lng must be given together",
            ))
        }
    };

    let form = state
        .address_forms
        .create(
            state.default_center,
            user_location,
            payload.zoom.unwrap_or(ADDRESS_FORM_ZOOM),
        )
        .await;

    Ok((
        StatusCode::CREATED,
        Json(AddressFormResponse {
            data: form.snapshot().await,
        }),
    )
        .into_response())
}
