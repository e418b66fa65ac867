use crate::{
    services::address_forms::address_form::LocationTrigger,
    types::{
        address_form_response::AddressFormResponse, app_state::AppState, coordinate::Coordinate,
    },
    utils::{app_error::AppError, validated_json::ValidatedJson},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::Deserialize;
use validator::Validate;

/// Map events only. Place selections arrive through the place route.
#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum MapEvent {
    MapClick,
    MarkerDrag,
}

impl From<MapEvent> for LocationTrigger {
    fn from(event: MapEvent) -> Self {
        match event {
            MapEvent::MapClick => LocationTrigger::MapClick,
            MapEvent::MarkerDrag => LocationTrigger::MarkerDrag,
        }
    }
}

#[derive(Validate, Deserialize)]
pub struct PostAddressFormLocationPayload {
    #[validate(range(min = -90.0, max = 90.0, message = "Must be a valid latitude"))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Must be a valid longitude"))]
    pub lng: f64,

    pub trigger: MapEvent,
}

#[cfg_attr(test, debug_handler)]
pub async fn post_address_form_location(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    ValidatedJson(payload): ValidatedJson<PostAddressFormLocationPayload>,
) -> Result<Response, AppError> {
    let coordinate = Coordinate::new(payload.lat, payload.lng)
        .map_err(|e| AppError::new(StatusCode::BAD_REQUEST, &e.to_string()))?;

    let form = state
        .address_forms
        .get(id)
        .await
        .ok_or_else(|| AppError::form_not_found(id))?;

    let snapshot = form
        .change_location(payload.trigger.into(), coordinate)
        .await?;

    Ok(Json(AddressFormResponse { data: snapshot }).into_response())
}
