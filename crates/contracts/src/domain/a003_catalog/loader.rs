//! Загрузка каталога из документов категорий.
//!
//! Транспорт не фиксирован: браузер передаёт сюда запрос через gloo-net,
//! сервер читает файлы с диска, тесты отдают готовые документы.

use futures::future::try_join_all;
use std::future::Future;

use super::aggregate::Catalog;
use crate::domain::a001_product::aggregate::Product;
use crate::domain::a002_category::aggregate::Category;
use crate::enums::CategoryKey;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("request for {path} failed: {message}")]
    Fetch { path: String, message: String },

    #[error("HTTP {status} for {path}")]
    Status { path: String, status: u16 },

    #[error("invalid category document {path}: {message}")]
    Parse { path: String, message: String },

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Разбор тела документа категории с привязкой ошибки к пути
pub fn parse_document(path: &str, raw: &str) -> Result<Category, CatalogError> {
    Category::from_json(raw).map_err(|e| CatalogError::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Загружает все категории одновременно и сливает их в каталог.
///
/// Первая же ошибка отменяет загрузку целиком: частичный каталог не
/// возвращается, повторов нет.
pub async fn load_catalog<F, Fut>(keys: &[CategoryKey], fetch: F) -> Result<Catalog, CatalogError>
where
    F: Fn(CategoryKey) -> Fut,
    Fut: Future<Output = Result<Category, CatalogError>>,
{
    let categories = try_join_all(keys.iter().map(|key| fetch(*key))).await?;
    Ok(Catalog::merge(categories))
}

/// Загружает документ одной категории и ищет в нём товар по slug.
///
/// `Ok(None)`: документ получен, но товара с таким slug нет.
pub async fn load_product<F, Fut>(
    category: &str,
    slug: &str,
    fetch: F,
) -> Result<Option<Product>, CatalogError>
where
    F: FnOnce(CategoryKey) -> Fut,
    Fut: Future<Output = Result<Category, CatalogError>>,
{
    let key = CategoryKey::from_code(category)
        .ok_or_else(|| CatalogError::UnknownCategory(category.to_string()))?;
    let document = fetch(key).await?;
    Ok(document.find_by_slug(slug))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::ready;
    use std::cell::RefCell;

    fn document(key: CategoryKey, count: usize) -> Category {
        let products: Vec<String> = (1..=count)
            .map(|i| {
                format!(
                    r#"{{"id": "{i}", "nome": "{k} {i}", "slug": "{k}-{i}", "descricao": "", "preco": "R$ {i}0,00"}}"#,
                    i = i,
                    k = key.code()
                )
            })
            .collect();
        let raw = format!(
            r#"{{"categoria": "{}", "titulo": "{}", "descricao": "", "produtos": [{}]}}"#,
            key.code(),
            key.display_name(),
            products.join(",")
        );
        parse_document(key.document_path(), &raw).unwrap()
    }

    #[test]
    fn test_load_catalog_merges_every_document() {
        let requested = RefCell::new(Vec::new());
        let catalog = block_on(load_catalog(&CategoryKey::all(), |key| {
            requested.borrow_mut().push(key);
            let count = match key {
                CategoryKey::Barbearia => 4,
                CategoryKey::Tecnologia => 3,
                CategoryKey::Consultoria => 2,
            };
            ready(Ok(document(key, count)))
        }))
        .unwrap();

        assert_eq!(requested.borrow().len(), 3);
        assert_eq!(catalog.product_count(), 9);
        assert_eq!(catalog.sections[1].key, "tecnologia");
    }

    #[test]
    fn test_load_catalog_fails_as_a_whole() {
        let result = block_on(load_catalog(&CategoryKey::all(), |key| {
            ready(match key {
                CategoryKey::Tecnologia => Err(CatalogError::Status {
                    path: key.document_path().to_string(),
                    status: 404,
                }),
                _ => Ok(document(key, 1)),
            })
        }));

        assert_eq!(
            result,
            Err(CatalogError::Status {
                path: "/db/produtos-tecnologia.json".to_string(),
                status: 404
            })
        );
    }

    #[test]
    fn test_load_product_found_and_missing() {
        let found = block_on(load_product("consultoria", "consultoria-2", |key| {
            ready(Ok(document(key, 3)))
        }))
        .unwrap()
        .unwrap();
        assert_eq!(found.name, "consultoria 2");
        assert_eq!(found.category, "consultoria");

        let missing = block_on(load_product("consultoria", "nada", |key| {
            ready(Ok(document(key, 3)))
        }))
        .unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_load_product_unknown_category_skips_fetch() {
        let fetched = RefCell::new(false);
        let result = block_on(load_product("moveis", "x", |key| {
            *fetched.borrow_mut() = true;
            ready(Ok(document(key, 1)))
        }));
        assert_eq!(result, Err(CatalogError::UnknownCategory("moveis".into())));
        assert!(!*fetched.borrow());
    }

    #[test]
    fn test_parse_document_error_mentions_path() {
        let err = parse_document("/db/x.json", "{not json").unwrap_err();
        assert!(err.to_string().contains("/db/x.json"));
    }
}
