use std::sync::{Arc, OnceLock};

use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use axum_prometheus::metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use kidney_compass_core::{application::create_service, domain::common::CompassConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::auth::router::auth_routes;
use crate::application::http::classification::router::classification_routes;
use crate::application::http::health::router::health_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

pub fn state(args: Arc<Args>) -> AppState {
    let config = CompassConfig::from(args.as_ref().clone());
    let service = create_service(config);
    AppState::new(args, service)
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Kidney Compass Backend is running!" }))
}

/// The metrics recorder is process-global and may only be installed once,
/// even when several routers are assembled (as the test suite does).
fn metric_handle() -> PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
    HANDLE
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install metrics recorder")
        })
        .clone()
}

/// Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let methods = [
        Method::GET,
        Method::POST,
        Method::DELETE,
        Method::PUT,
        Method::PATCH,
        Method::OPTIONS,
    ];
    let headers = [AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT];

    let origins = &state.args.server.allowed_origins;
    debug!("Allowed origins: {:?}", origins);

    // A wildcard origin cannot be combined with credentials.
    let cors = if origins.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_methods(methods)
            .allow_origin(tower_http::cors::Any)
            .allow_headers(headers)
    } else {
        let allowed_origins = origins
            .iter()
            .map(|origin| HeaderValue::from_str(origin))
            .collect::<Result<Vec<HeaderValue>, _>>()?;
        CorsLayer::new()
            .allow_methods(methods)
            .allow_origin(allowed_origins)
            .allow_headers(headers)
            .allow_credentials(true)
    };

    let prometheus_layer = PrometheusMetricLayer::new();
    let metric_handle = metric_handle();

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    let api_docs_url = format!("{root_path}/api-docs/openapi.json");

    let router = Router::new()
        .merge(SwaggerUi::new(format!("{root_path}/swagger-ui")).url(api_docs_url, openapi))
        .route(&format!("{root_path}/"), get(root))
        .merge(classification_routes(state.clone()))
        .merge(auth_routes(state.clone()))
        .merge(health_routes(state.clone()))
        .route(
            &format!("{root_path}/metrics"),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}
