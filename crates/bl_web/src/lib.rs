use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod state;
pub mod views;

pub use config::ServerConfig;
pub use error::AppError;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route(routes::HOME, get(handlers::home))
        .route(routes::SEARCH, get(handlers::search))
        .route(routes::RESULTS, get(handlers::results))
        .route(routes::CATEGORIES, get(handlers::categories))
        .route(routes::ARTICLE, get(handlers::article))
        .route(routes::ABOUT, get(handlers::about))
        .route(
            routes::CONTACT,
            get(handlers::contact).post(handlers::submit_contact),
        )
        .route(routes::API_ARTICLES, get(api::list_articles))
        .route(routes::API_ARTICLE, get(api::get_article))
        .route(routes::API_PERSPECTIVES, get(api::list_perspectives))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Binds `config` and serves until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    info!("🌐 BiasLens listening on {}", config);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

pub mod prelude {
    pub use bl_core::{ArticleRecord, Error, Result};
    pub use crate::{AppState, ServerConfig};
}
