use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::a003_catalog::aggregate::Catalog;
use contracts::domain::a003_catalog::loader::{self, parse_document, CatalogError};
use contracts::enums::CategoryKey;
use std::path::Path;

/// Читает и разбирает документ категории из каталога данных
pub async fn read_category(data_dir: &Path, key: CategoryKey) -> Result<Category, CatalogError> {
    let path = data_dir.join(key.document_file_name());
    let display = path.display().to_string();
    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| CatalogError::Fetch {
            path: display.clone(),
            message: e.to_string(),
        })?;
    parse_document(&display, &raw)
}

/// Полный каталог: все документы читаются одновременно, без кэша
pub async fn load_catalog(data_dir: &Path) -> Result<Catalog, CatalogError> {
    loader::load_catalog(&CategoryKey::all(), |key| read_category(data_dir, key)).await
}

/// Товар по паре категория + slug
pub async fn find_product(
    data_dir: &Path,
    category: &str,
    slug: &str,
) -> Result<Option<Product>, CatalogError> {
    loader::load_product(category, slug, |key| read_category(data_dir, key)).await
}

/// Проверка документов при старте: только логирование, сервер стартует
/// в любом случае
pub async fn validate_documents(data_dir: &Path) {
    for key in CategoryKey::all() {
        match read_category(data_dir, key).await {
            Ok(category) => {
                if category.key != key.code() {
                    tracing::warn!(
                        "{} declares category '{}', expected '{}'",
                        key.document_file_name(),
                        category.key,
                        key.code()
                    );
                }
                let duplicates = category.duplicate_slugs();
                if !duplicates.is_empty() {
                    tracing::warn!(
                        "{}: duplicate slugs {:?}, detail pages resolve to the first match",
                        key.document_file_name(),
                        duplicates
                    );
                }
                tracing::info!(
                    "Category '{}' loaded: {} products",
                    key.code(),
                    category.products.len()
                );
            }
            Err(e) => tracing::error!("Category '{}' is unavailable: {}", key.code(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixtures_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../public/db")
    }

    #[tokio::test]
    async fn test_reads_every_fixture_document() {
        for key in CategoryKey::all() {
            let category = read_category(&fixtures_dir(), key).await.unwrap();
            assert_eq!(category.key, key.code());
        }
    }

    #[tokio::test]
    async fn test_missing_directory_is_fetch_error() {
        let err = load_catalog(Path::new("/nonexistent/lazarus-db"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Fetch { .. }));
    }

    #[tokio::test]
    async fn test_find_product_in_fixtures() {
        let found = find_product(&fixtures_dir(), "barbearia", "setup-implantacao")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.name, "Setup de Implantação");
        assert_eq!(found.category, "barbearia");
    }
}
