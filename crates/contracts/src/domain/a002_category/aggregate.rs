use serde::{Deserialize, Serialize};

use crate::domain::a001_product::aggregate::Product;

/// Документ категории: одна категория на один статический JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Ключ категории ("barbearia", "tecnologia", ...)
    #[serde(rename = "categoria")]
    pub key: String,

    #[serde(rename = "titulo", default)]
    pub title: String,

    #[serde(rename = "descricao", default)]
    pub description: String,

    #[serde(rename = "produtos", default)]
    pub products: Vec<Product>,
}

impl Category {
    /// Разбор документа категории из JSON
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Товары с проставленным ключом этой категории
    pub fn tagged_products(&self) -> Vec<Product> {
        self.products
            .iter()
            .cloned()
            .map(|p| p.with_category(&self.key))
            .collect()
    }

    /// Первый товар с указанным slug, дополненный ключом категории.
    ///
    /// Уникальность slug не проверяется: при дубликатах выигрывает первый.
    pub fn find_by_slug(&self, slug: &str) -> Option<Product> {
        self.products
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
            .map(|p| p.with_category(&self.key))
    }

    /// Slug'и, встречающиеся в документе больше одного раза
    pub fn duplicate_slugs(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for p in &self.products {
            if !seen.insert(p.slug.as_str()) && !duplicates.contains(&p.slug) {
                duplicates.push(p.slug.clone());
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Category {
        Category::from_json(
            r#"{
                "categoria": "tecnologia",
                "titulo": "Tecnologia",
                "descricao": "Sistemas",
                "produtos": [
                    {"id": 1, "nome": "Primeiro", "slug": "dup", "descricao": "", "preco": "R$ 10", "compraUrl": ""},
                    {"id": 2, "nome": "Segundo", "slug": "dup", "descricao": "", "preco": "R$ 20", "compraUrl": ""},
                    {"id": 3, "nome": "Outro", "slug": "outro", "descricao": "", "preco": "R$ 30", "compraUrl": ""}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_find_by_slug_tags_category() {
        let found = doc().find_by_slug("outro").unwrap();
        assert_eq!(found.name, "Outro");
        assert_eq!(found.category, "tecnologia");
    }

    #[test]
    fn test_duplicate_slug_resolves_to_first() {
        let found = doc().find_by_slug("dup").unwrap();
        assert_eq!(found.name, "Primeiro");
        assert_eq!(doc().duplicate_slugs(), vec!["dup".to_string()]);
    }

    #[test]
    fn test_unknown_slug() {
        assert!(doc().find_by_slug("nao-existe").is_none());
    }

    #[test]
    fn test_missing_products_array_is_empty() {
        let c = Category::from_json(r#"{"categoria": "x"}"#).unwrap();
        assert!(c.products.is_empty());
        assert!(c.tagged_products().is_empty());
    }
}
