use std::sync::Arc;

use crate::{
    services::address_forms::{
        form_registry::FormRegistry, place_search_service::PlaceSearchService,
    },
    types::{coordinate::Coordinate, dashboard_summary::DashboardSummary},
};

#[derive(Clone)]
pub struct AppState {
    pub place_search: Arc<dyn PlaceSearchService>,
    pub address_forms: Arc<FormRegistry>,
    pub default_center: Coordinate,
    pub dashboard: DashboardSummary,
    pub auth_key: Option<String>,
}
