use crate::{
    services::address_forms::address_form::AddressFormError,
    types::{address_form_response::AddressFormResponse, app_state::AppState},
    utils::{app_error::AppError, validated_json::ValidatedJson},
};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct PostAddressFormPlacePayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub place_id: String,
}

pub async fn post_address_form_place(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    ValidatedJson(payload): ValidatedJson<PostAddressFormPlacePayload>,
) -> Result<Response, AppError> {
    let form = state
        .address_forms
        .get(id)
        .await
        .ok_or_else(|| AppError::form_not_found(id))?;

    let place = state
        .place_search
        .place_details(&payload.place_id)
        .await
        .map_err(|e| AddressFormError::PlaceLookup(e.to_string()))?
        .ok_or(AddressFormError::PlaceNotFound)?;

    let snapshot = form.select_place(place).await?;

    Ok(Json(AddressFormResponse { data: snapshot }).into_response())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::{
        app::gen_mock_app,
        routes::test_support::{
            create_form, mock_geocode, read_json, send_json, springfield_geocode,
        },
        services::maps_client::types::{
            google_geocode_response::{GoogleGeometry, GoogleLatLng},
            google_place_details_response::{
                GooglePlaceDetailsResponse, GooglePlaceDetailsResult,
            },
        },
        types::coordinate::Coordinate,
    };

    async fn mock_place(
        server: &mut mockito::ServerGuard,
        response: &GooglePlaceDetailsResponse,
    ) -> mockito::Mock {
        server
            .mock("GET", "/maps/api/place/details/json")
            .match_query(mockito::Matcher::Any)
            .with_body(serde_json::to_string(response).unwrap())
            .create_async()
            .await
    }

    #[tokio::test]
    async fn selected_place_is_geocoded_through_the_same_path() {
        let mut mock_app = gen_mock_app().await;
        let id = create_form(&mock_app.app).await;
        let _place = mock_place(
            &mut mock_app.google_server,
            &GooglePlaceDetailsResponse {
                result: Some(GooglePlaceDetailsResult {
                    formatted_address: Some("Main St, Springfield".to_string()),
                    geometry: Some(GoogleGeometry {
                        location: GoogleLatLng {
                            lat: 39.78,
                            lng: -89.65,
                        },
                    }),
                }),
                status: "OK".to_string(),
                error_message: None,
            },
        )
        .await;
        let geocode = mock_geocode(&mut mock_app.google_server, &springfield_geocode()).await;

        let response = send_json(
            &mock_app.app,
            "POST",
            &format!("/address-forms/{}/place", id),
            json!({ "place_id": "abc" }),
        )
        .await;

        geocode.assert_async().await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: AddressFormResponse = read_json(response).await;
        let location = Coordinate::new(39.78, -89.65).unwrap();
        assert_eq!(body.data.map.center, location);
        assert_eq!(body.data.map.marker, Some(location));
        assert_eq!(
            body.data.address.formatted_address,
            "1 Main St, Springfield, IL 62704"
        );
        assert_eq!(body.data.address.pincode, "62704");
    }

    #[tokio::test]
    async fn place_without_geometry_sets_text_only() {
        let mut mock_app = gen_mock_app().await;
        let id = create_form(&mock_app.app).await;
        let _place = mock_place(
            &mut mock_app.google_server,
            &GooglePlaceDetailsResponse {
                result: Some(GooglePlaceDetailsResult {
                    formatted_address: Some("Springfield, IL".to_string()),
                    geometry: None,
                }),
                status: "OK".to_string(),
                error_message: None,
            },
        )
        .await;

        let response = send_json(
            &mock_app.app,
            "POST",
            &format!("/address-forms/{}/place", id),
            json!({ "place_id": "abc" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: AddressFormResponse = read_json(response).await;
        assert_eq!(body.data.address.formatted_address, "Springfield, IL");
        assert_eq!(body.data.address.city, "");
        assert_eq!(body.data.map.marker, None);
    }

    #[tokio::test]
    async fn unknown_place_is_not_found() {
        let mut mock_app = gen_mock_app().await;
        let id = create_form(&mock_app.app).await;
        let _place = mock_place(
            &mut mock_app.google_server,
            &GooglePlaceDetailsResponse {
                result: None,
                status: "NOT_FOUND".to_string(),
                error_message: None,
            },
        )
        .await;

        let response = send_json(
            &mock_app.app,
            "POST",
            &format!("/address-forms/{}/place", id),
            json!({ "place_id": "missing" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
