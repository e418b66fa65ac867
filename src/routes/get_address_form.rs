use crate::{
    types::{address_form_response::AddressFormResponse, app_state::AppState},
    utils::app_error::AppError,
};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};

pub async fn get_address_form(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, AppError> {
    let form = state
        .address_forms
        .get(id)
        .await
        .ok_or_else(|| AppError::form_not_found(id))?;

    Ok(Json(AddressFormResponse {
        data: form.snapshot().await,
    })
    .into_response())
}
