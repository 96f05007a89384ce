// --- File: crates/services/agendify_backend/src/app_state.rs ---
use agendify_availability::{DynScheduleStore, InMemoryScheduleStore};
use agendify_config::AppConfig;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared by all feature routers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<DynScheduleStore>,
}

impl AppState {
    /// State backed by the in-memory schedule store.
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            store: Arc::new(InMemoryScheduleStore::new()),
        }
    }

    /// The full application router, everything nested under `/api`.
    pub fn router(&self) -> Router {
        let api_router = Router::new()
            .route("/", get(|| async { "Welcome to Agendify API!" }))
            .merge(agendify_common::routes())
            .merge(agendify_availability::routes(
                self.config.clone(),
                self.store.clone(),
            ));

        Router::new()
            .nest("/api", api_router)
            .layer(TraceLayer::new_for_http())
    }
}
