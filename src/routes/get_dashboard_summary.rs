use crate::types::{app_state::AppState, dashboard_summary::DashboardSummary};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct GetDashboardSummaryResponse {
    pub data: DashboardSummary,
}

pub async fn get_dashboard_summary(State(state): State<AppState>) -> Response {
    Json(GetDashboardSummaryResponse {
        data: state.dashboard,
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::{
        app::gen_mock_app,
        routes::test_support::{read_json, send_empty},
    };

    #[tokio::test]
    async fn returns_tiles_in_display_order() {
        let mock_app = gen_mock_app().await;

        let response = send_empty(&mock_app.app, "GET", "/dashboard/summary").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: GetDashboardSummaryResponse = read_json(response).await;
        let titles: Vec<&str> = body.data.tiles.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Employers",
                "Candidates",
                "Jobs Applied",
                "Jobs Posted",
                "Incomplete Profiles"
            ]
        );
        assert_eq!(body.data.tiles[1].count, 150);
        assert_eq!(body.data.highlights.len(), 2);
        assert_eq!(body.data.highlights[1].count, 200);
    }
}
