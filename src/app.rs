use std::{env, sync::Arc, time::Duration};

use crate::{
    middlewares::auth::auth_middleware,
    routes::apply_routes,
    services::{
        address_forms::{
            address_form::AddressFormCallbacks,
            form_registry::{FormLimits, FormRegistry},
        },
        address_resolution::address_resolver::AddressResolver,
        maps_client::{
            maps_service::{MapsService, MapsServiceConfig},
            types::maps_service_error::MapsServiceError,
        },
    },
    types::{app_state::AppState, coordinate::Coordinate, dashboard_summary::DashboardSummary},
};
use axum::{middleware, routing::get, Router};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tracing::info;

const DEFAULT_MAPS_HOST: &str = "https://maps.googleapis.com";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_MAPS_TIMEOUT_SECS: u64 = 10;
const DEFAULT_FORM_TTL_SECS: u64 = 1800;
const DEFAULT_MAX_ADDRESS_FORMS: usize = 10_000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is invalid: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub maps_host: String,
    pub maps_key: String,
    pub maps_timeout: Duration,
    pub auth_key: Option<String>,
    pub default_center: Coordinate,
    pub bind_address: String,
    pub form_limits: FormLimits,
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(name)
        .map(|value| {
            value
                .parse::<T>()
                .map_err(|_| ConfigError::Invalid { name, value })
        })
        .transpose()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let maps_key = lookup("GOOGLE_MAPS_API_KEY")
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::Missing("GOOGLE_MAPS_API_KEY"))?;

        let default_center = match (
            parse_var::<f64>(&lookup, "DEFAULT_CENTER_LAT")?,
            parse_var::<f64>(&lookup, "DEFAULT_CENTER_LNG")?,
        ) {
            (Some(lat), Some(lng)) => {
                Coordinate::new(lat, lng).map_err(|e| ConfigError::Invalid {
                    name: "DEFAULT_CENTER_LAT/DEFAULT_CENTER_LNG",
                    value: e.to_string(),
                })?
            }
            (None, None) => Coordinate::FALLBACK,
            (Some(_), None) => return Err(ConfigError::Missing("DEFAULT_CENTER_LNG")),
            (None, Some(_)) => return Err(ConfigError::Missing("DEFAULT_CENTER_LAT")),
        };

        Ok(AppConfig {
            maps_host: lookup("GOOGLE_MAPS_HOST").unwrap_or_else(|| DEFAULT_MAPS_HOST.to_string()),
            maps_key,
            maps_timeout: Duration::from_secs(
                parse_var::<u64>(&lookup, "MAPS_TIMEOUT_SECS")?.unwrap_or(DEFAULT_MAPS_TIMEOUT_SECS),
            ),
            auth_key: lookup("AUTH_KEY").filter(|k| !k.is_empty()),
            default_center,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            form_limits: FormLimits {
                ttl: Duration::from_secs(
                    parse_var::<u64>(&lookup, "FORM_TTL_SECS")?.unwrap_or(DEFAULT_FORM_TTL_SECS),
                ),
                max_forms: parse_var::<usize>(&lookup, "MAX_ADDRESS_FORMS")?
                    .unwrap_or(DEFAULT_MAX_ADDRESS_FORMS),
            },
        })
    }
}

fn form_callbacks() -> AddressFormCallbacks {
    AddressFormCallbacks {
        on_address_update: Arc::new(|address: &str| info!("Address updated: {}", address)),
        on_submit: Arc::new(|address: &str| info!("Address submitted: {}", address)),
    }
}

pub fn gen_app(config: AppConfig) -> Result<Router, MapsServiceError> {
    let cors_middleware = CorsLayer::new();
    let maps_service = Arc::new(MapsService::new(MapsServiceConfig {
        api_key: config.maps_key,
        host: config.maps_host,
        timeout: config.maps_timeout,
    })?);

    let state = AppState {
        place_search: maps_service.clone(),
        address_forms: Arc::new(FormRegistry::new(
            AddressResolver::new(maps_service),
            form_callbacks(),
            config.form_limits,
        )),
        default_center: config.default_center,
        dashboard: DashboardSummary::default(),
        auth_key: config.auth_key,
    };

    Ok(apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state))
}

async fn root() -> &'static str {
    "Address service is up"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub google_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app_with_auth(auth_key: Option<String>) -> MockApp {
    let google_server = mockito::Server::new_async().await;

    let app = gen_app(AppConfig {
        maps_host: google_server.url(),
        maps_key: "key".to_string(),
        maps_timeout: Duration::from_secs(5),
        auth_key,
        default_center: Coordinate::FALLBACK,
        bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        form_limits: FormLimits {
            ttl: Duration::from_secs(DEFAULT_FORM_TTL_SECS),
            max_forms: DEFAULT_MAX_ADDRESS_FORMS,
        },
    })
    .unwrap();

    MockApp { app, google_server }
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    gen_mock_app_with_auth(None).await
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |name: &str| vars.get(name).cloned()
    }

    #[tokio::test]
    async fn root_responds() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn config_requires_maps_key() {
        assert_eq!(
            AppConfig::from_lookup(lookup_from(&[])),
            Err(ConfigError::Missing("GOOGLE_MAPS_API_KEY"))
        );
    }

    #[test]
    fn config_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("GOOGLE_MAPS_API_KEY", "abc")])).unwrap();

        assert_eq!(config.maps_host, "https://maps.googleapis.com");
        assert_eq!(config.maps_timeout, Duration::from_secs(10));
        assert_eq!(config.default_center, Coordinate::FALLBACK);
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert_eq!(config.auth_key, None);
        assert_eq!(
            config.form_limits,
            FormLimits {
                ttl: Duration::from_secs(1800),
                max_forms: 10_000,
            }
        );
    }

    #[test]
    fn config_reads_form_limits() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GOOGLE_MAPS_API_KEY", "abc"),
            ("FORM_TTL_SECS", "60"),
            ("MAX_ADDRESS_FORMS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.form_limits.ttl, Duration::from_secs(60));
        assert_eq!(config.form_limits.max_forms, 5);
    }

    #[test]
    fn config_reads_default_center() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GOOGLE_MAPS_API_KEY", "abc"),
            ("DEFAULT_CENTER_LAT", "51.5074"),
            ("DEFAULT_CENTER_LNG", "0.1278"),
            ("AUTH_KEY", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.default_center, Coordinate::new(51.5074, 0.1278).unwrap());
        assert_eq!(config.auth_key, Some("secret".to_string()));
    }

    #[test]
    fn config_rejects_half_a_center() {
        assert_eq!(
            AppConfig::from_lookup(lookup_from(&[
                ("GOOGLE_MAPS_API_KEY", "abc"),
                ("DEFAULT_CENTER_LAT", "51.5074"),
            ])),
            Err(ConfigError::Missing("DEFAULT_CENTER_LNG"))
        );
    }

    #[test]
    fn config_rejects_unparseable_timeout() {
        assert_eq!(
            AppConfig::from_lookup(lookup_from(&[
                ("GOOGLE_MAPS_API_KEY", "abc"),
                ("MAPS_TIMEOUT_SECS", "soon"),
            ])),
            Err(ConfigError::Invalid {
                name: "MAPS_TIMEOUT_SECS",
                value: "soon".to_string(),
            })
        );
    }
}
