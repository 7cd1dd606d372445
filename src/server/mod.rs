mod handlers;
mod state;

use axum::Router;
use axum::routing::get;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::resolver::Resolver;

pub fn build_router(resolver: Resolver) -> Router {
    let state = Arc::new(AppState { resolver });

    Router::new()
        .route("/api/resolve", get(handlers::resolve))
        .route("/api/regions", get(handlers::region_list))
        .route("/api/categories", get(handlers::category_list))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(resolver: Resolver, host: &str, port: u16) -> std::io::Result<()> {
    let app = build_router(resolver);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("geotagger server listening on http://{}", addr);

    axum::serve(listener, app).await
}
