pub mod handlers;
pub mod types;

use crate::{Result, assistant::Assistant, config::Config, session::SessionStore};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/chat", post(handlers::chat))
        .route("/image/upload", post(handlers::upload_image))
        .route("/image/chat", post(handlers::image_chat))
        .route("/ocr", post(handlers::ocr))
        .route("/table/upload", post(handlers::upload_table))
        .route("/table/ask", post(handlers::ask_table))
        .route(
            "/sessions/:session_id/transcript",
            get(handlers::download_transcript),
        )
        .route("/sessions/:session_id", delete(handlers::close_session))
        .route("/sessions/:session_id/ocr", get(handlers::download_ocr))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let assistant = Assistant::new(&config)?;

    let app_state = AppState {
        assistant: Arc::new(assistant),
        sessions: Arc::new(SessionStore::new()),
    };

    let app = router(app_state, config.server.max_upload_bytes);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
