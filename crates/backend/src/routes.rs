use axum::{routing::get, Router};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

use crate::api::handlers;

/// Общее состояние обработчиков: только пути, без изменяемых данных
#[derive(Clone)]
pub struct AppState {
    pub data_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir: Arc::new(data_dir),
        }
    }
}

/// Конфигурация всех роутов приложения
///
/// Клиентские маршруты SPA (`/produto/...`) отдают index.html собранного
/// фронтенда.
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/catalog", get(handlers::catalog::get_catalog))
        .route(
            "/api/catalog/:categoria/:slug",
            get(handlers::catalog::get_product),
        )
        .nest_service("/db", ServeDir::new(state.data_dir.as_path()))
        .fallback_service(spa)
        .with_state(state)
}
