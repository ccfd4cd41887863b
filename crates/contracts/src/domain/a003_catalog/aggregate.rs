use serde::{Deserialize, Serialize};

use crate::domain::a001_product::aggregate::Product;
use crate::domain::a002_category::aggregate::Category;

/// Секция каталога: метаданные категории и её товары с проставленным ключом
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSection {
    pub key: String,
    pub title: String,
    pub description: String,
    pub products: Vec<Product>,
}

/// Каталог времени выполнения: ключ категории -> товары.
///
/// Порядок секций совпадает с порядком загрузки документов.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub sections: Vec<CatalogSection>,
}

impl Catalog {
    /// Слияние загруженных документов. Повторный ключ заменяет товары
    /// секции, оставляя её на исходной позиции.
    pub fn merge(categories: Vec<Category>) -> Self {
        let mut sections: Vec<CatalogSection> = Vec::with_capacity(categories.len());
        for category in categories {
            let section = CatalogSection {
                products: category.tagged_products(),
                key: category.key,
                title: category.title,
                description: category.description,
            };
            match sections.iter_mut().find(|s| s.key == section.key) {
                Some(existing) => *existing = section,
                None => sections.push(section),
            }
        }
        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.products.is_empty())
    }

    pub fn section(&self, key: &str) -> Option<&CatalogSection> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Товары категории по ключу
    pub fn products_of(&self, key: &str) -> &[Product] {
        self.section(key).map(|s| s.products.as_slice()).unwrap_or(&[])
    }

    /// Все товары подряд, в порядке секций
    pub fn flatten(&self) -> impl Iterator<Item = &Product> {
        self.sections.iter().flat_map(|s| s.products.iter())
    }

    pub fn product_count(&self) -> usize {
        self.sections.iter().map(|s| s.products.len()).sum()
    }

    /// Поиск товара по паре категория + slug (первое совпадение)
    pub fn find(&self, category: &str, slug: &str) -> Option<&Product> {
        self.products_of(category).iter().find(|p| p.slug == slug)
    }

    /// Пары (ключ, заголовок) для фильтра категорий
    pub fn category_options(&self) -> Vec<(String, String)> {
        self.sections
            .iter()
            .map(|s| (s.key.clone(), s.title.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(key: &str, slugs: &[&str]) -> Category {
        let products: Vec<String> = slugs
            .iter()
            .enumerate()
            .map(|(i, s)| {
                format!(
                    r#"{{"id": {}, "nome": "{}", "slug": "{}", "descricao": "", "preco": "R$ 10"}}"#,
                    i + 1,
                    s,
                    s
                )
            })
            .collect();
        Category::from_json(&format!(
            r#"{{"categoria": "{}", "titulo": "T {}", "descricao": "", "produtos": [{}]}}"#,
            key,
            key,
            products.join(",")
        ))
        .unwrap()
    }

    #[test]
    fn test_merge_keeps_order_and_tags_products() {
        let catalog = Catalog::merge(vec![
            category("barbearia", &["a", "b"]),
            category("tecnologia", &["c"]),
        ]);
        assert_eq!(catalog.product_count(), 3);
        let keys: Vec<&str> = catalog.sections.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["barbearia", "tecnologia"]);
        assert!(catalog.flatten().all(|p| !p.category.is_empty()));
        assert_eq!(catalog.products_of("tecnologia")[0].category, "tecnologia");
    }

    #[test]
    fn test_merge_replaces_repeated_key() {
        let catalog = Catalog::merge(vec![
            category("barbearia", &["a", "b"]),
            category("tecnologia", &["c"]),
            category("barbearia", &["z"]),
        ]);
        assert_eq!(catalog.sections.len(), 2);
        assert_eq!(catalog.sections[0].key, "barbearia");
        assert_eq!(catalog.products_of("barbearia").len(), 1);
    }

    #[test]
    fn test_find_and_missing_category() {
        let catalog = Catalog::merge(vec![category("barbearia", &["a"])]);
        assert!(catalog.find("barbearia", "a").is_some());
        assert!(catalog.find("barbearia", "x").is_none());
        assert!(catalog.products_of("consultoria").is_empty());
        assert!(Catalog::default().is_empty());
    }
}
