use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a003_catalog::aggregate::Catalog;
use contracts::domain::a003_catalog::loader::CatalogError;

use crate::domain::a003_catalog::service;
use crate::routes::AppState;

/// GET /api/catalog
pub async fn get_catalog(State(state): State<AppState>) -> Result<Json<Catalog>, StatusCode> {
    match service::load_catalog(&state.data_dir).await {
        Ok(catalog) => Ok(Json(catalog)),
        Err(e) => {
            tracing::error!("Catalog load failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/catalog/:categoria/:slug
pub async fn get_product(
    State(state): State<AppState>,
    Path((categoria, slug)): Path<(String, String)>,
) -> Result<Json<Product>, StatusCode> {
    match service::find_product(&state.data_dir, &categoria, &slug).await {
        Ok(Some(product)) => Ok(Json(product)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(CatalogError::UnknownCategory(_)) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Product lookup {}/{} failed: {}", categoria, slug, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
