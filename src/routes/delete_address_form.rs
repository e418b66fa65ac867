use crate::{types::app_state::AppState, utils::app_error::AppError};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub async fn delete_address_form(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, AppError> {
    state
        .address_forms
        .remove(id)
        .await
        .ok_or_else(|| AppError::form_not_found(id))?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::gen_mock_app,
        routes::test_support::{create_form, send_empty},
    };

    #[tokio::test]
    async fn closing_discards_the_form() {
        let mock_app = gen_mock_app().await;
        let id = create_form(&mock_app.app).await;
        let uri = format!("/address-forms/{}", id);

        let response = send_empty(&mock_app.app, "DELETE", &uri).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send_empty(&mock_app.app, "GET", &uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send_empty(&mock_app.app, "DELETE", &uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
