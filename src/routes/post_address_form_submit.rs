use crate::{
    types::{app_state::AppState, structured_address::StructuredAddress},
    utils::app_error::AppError,
};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct PostAddressFormSubmitResponseData {
    pub formatted_address: String,
    pub address: StructuredAddress,
}

#[derive(Serialize, Deserialize)]
pub struct PostAddressFormSubmitResponse {
    pub data: PostAddressFormSubmitResponseData,
}

/// Validates the form and discards it. A rejected submit keeps the form open.
pub async fn post_address_form_submit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, AppError> {
    let form = state
        .address_forms
        .get(id)
        .await
        .ok_or_else(|| AppError::form_not_found(id))?;

    let address = form.submit().await?;
    state.address_forms.remove(id).await;

    Ok(Json(PostAddressFormSubmitResponse {
        data: PostAddressFormSubmitResponseData {
            formatted_address: address.formatted_address.clone(),
            address,
        },
    })
    .into_response())
}
