pub mod handlers;
mod types;

pub use types::*;

use crate::{Result, config::Config, inference::HttpInferenceClient, relay::Relay};
use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::post,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Builds the router. The CORS layer answers OPTIONS preflight; the
/// handler itself attaches the relay headers to actual responses.
pub fn app(relay: Arc<Relay>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::OPTIONS, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-amz-date"),
            HeaderName::from_static("x-api-key"),
            HeaderName::from_static("x-amz-security-token"),
        ]);

    Router::new()
        .route("/chat", post(handlers::chat))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(handlers::AppState { relay })
}

pub async fn run(config: Config) -> Result<()> {
    // Resolve the backend client once; it is shared by all invocations.
    let client = HttpInferenceClient::new(&config.inference)?;
    let relay = Arc::new(Relay::new(Arc::new(client)));

    let app = app(relay);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!(
        "Starting server on {} relaying to {}",
        addr, config.inference.base_url
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
