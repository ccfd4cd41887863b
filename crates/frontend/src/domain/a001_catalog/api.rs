//! Загрузка документов категорий из `/db` того же origin.

use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::a003_catalog::aggregate::Catalog;
use contracts::domain::a003_catalog::loader::{self, parse_document, CatalogError};
use contracts::enums::CategoryKey;
use gloo_net::http::Request;

/// Один документ категории
pub async fn fetch_category(key: CategoryKey) -> Result<Category, CatalogError> {
    let path = key.document_path();
    let fetch_error = |e: gloo_net::Error| CatalogError::Fetch {
        path: path.to_string(),
        message: e.to_string(),
    };

    let response = Request::get(path)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(fetch_error)?;

    if !response.ok() {
        return Err(CatalogError::Status {
            path: path.to_string(),
            status: response.status(),
        });
    }

    let raw = response.text().await.map_err(fetch_error)?;
    parse_document(path, &raw)
}

/// Все категории сразу; первая ошибка отменяет загрузку
pub async fn fetch_catalog() -> Result<Catalog, String> {
    loader::load_catalog(&CategoryKey::all(), fetch_category)
        .await
        .map_err(|e| format!("Erro ao carregar produtos: {}", e))
}

/// Товар для страницы деталей. Документ категории запрашивается заново
/// при каждом открытии.
pub async fn fetch_product(category: &str, slug: &str) -> Result<Option<Product>, String> {
    loader::load_product(category, slug, fetch_category)
        .await
        .map_err(|e| format!("Erro ao carregar produto: {}", e))
}
