use crate::{
    types::{app_state::AppState, coordinate::Coordinate},
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetLocationSearchAutocompletePayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub search: String,

    #[validate(range(min = -90.0, max = 90.0, message = "Must be a valid latitude"))]
    pub lat: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Must be a valid longitude"))]
    pub lon: Option<f64>,
}

#[derive(Serialize, Deserialize)]
pub struct GetLocationSearchAutocompleteResponseDataPrediction {
    pub main_text: String,
    pub secondary_text: String,
    pub place_id: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetLocationSearchAutocompleteResponseData {
    pub predictions: Vec<GetLocationSearchAutocompleteResponseDataPrediction>,
}

#[derive(Serialize, Deserialize)]
pub struct GetLocationSearchAutocompleteResponse {
    pub data: GetLocationSearchAutocompleteResponseData,
}

pub async fn get_location_search_autocomplete(
    State(state): State<AppState>,
    ValidatedQuery(GetLocationSearchAutocompletePayload { search, lat, lon }): ValidatedQuery<
        GetLocationSearchAutocompletePayload,
    >,
) -> Result<Response, AppError> {
    let near = match (lat, lon) {
        (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon).map_err(|e| {
            AppError::new(StatusCode::BAD_REQUEST, &e.to_string())
        })?),
        (None, None) => None,
        _ => {
            return Err(AppError::new(
                StatusCode::BAD_REQUEST,
                "lat and lon must be given together",
            ))
        }
    };

    let predictions = state
        .place_search
        .autocomplete(&search, near)
        .await
        .map_err(|e| {
            error!("Failed to fetch location search autocomplete: {}", e);
            AppError::new(
                StatusCode::BAD_GATEWAY,
                "Failed to fetch location search autocomplete",
            )
        })?;

    Ok(Json(GetLocationSearchAutocompleteResponse {
        data: GetLocationSearchAutocompleteResponseData {
            predictions: predictions
                .into_iter()
                .map(|p| GetLocationSearchAutocompleteResponseDataPrediction {
                    main_text: p.main_text,
                    secondary_text: p.secondary_text,
                    place_id: p.place_id,
                })
                .collect(),
        },
    })
    .into_response())
}
