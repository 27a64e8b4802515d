use std::net::SocketAddr;

use axum::{Router, response::Html, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use solar_predict::api_docs::ApiDoc;
use solar_predict::config::Config;
use solar_predict::routes::predict_routes::api_routes;
use solar_predict::shared_state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::load("config.json") {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config.json: {e}");
            return;
        }
    };
    info!(
        ml_service = %config.ml_service.base_url,
        timeout_s = config.ml_service.timeout_s,
        "configuration loaded"
    );

    let server_port = config.server.port;
    let state = AppState::new(config);

    let app = Router::new()
        .nest("/api", api_routes(state))
        .route(
            "/scalar",
            get(|| async { Html(Scalar::new(ApiDoc::openapi()).to_html()) }),
        )
        .fallback_service(ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], server_port));
    info!("API server listening on http://{addr}");
    info!("Scalar UI: http://{addr}/scalar");

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
