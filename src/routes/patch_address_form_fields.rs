use crate::{
    types::{
        address_form_response::AddressFormResponse, app_state::AppState,
        structured_address::StructuredAddressEdits,
    },
    utils::app_error::AppError,
};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};

pub async fn patch_address_form_fields(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(edits): Json<StructuredAddressEdits>,
) -> Result<Response, AppError> {
    let form = state
        .address_forms
        .get(id)
        .await
        .ok_or_else(|| AppError::form_not_found(id))?;

    Ok(Json(AddressFormResponse {
        data: form.edit_fields(edits).await,
    })
    .into_response())
}
