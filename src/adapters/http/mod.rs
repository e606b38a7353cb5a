pub mod handlers;
pub mod response;

use crate::core::service::LookupService;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

#[derive(Clone)]
pub struct AppState {
    pub service: LookupService,
}

/// API 路由，以及由 `static_dir` 提供的首頁
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/symptom-check", post(handlers::symptom_check))
        .route("/api/first-aid", get(handlers::first_aid_search))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // 無法監聽訊號時保持執行
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
