use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор товара в документе категории
///
/// В JSON встречается и как строка (`"3"`), и как число (`3`), поэтому
/// хранится в текстовом виде.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Числовое значение идентификатора, если он целый
    pub fn as_number(&self) -> Option<u64> {
        self.0.trim().parse::<u64>().ok()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ProductId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => ProductId(s),
            RawId::Unsigned(n) => ProductId(n.to_string()),
            RawId::Signed(n) => ProductId(n.to_string()),
        })
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар или услуга из каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    /// Отображаемое название
    #[serde(rename = "nome")]
    pub name: String,

    /// URL-ключ, уникальный в пределах категории
    pub slug: String,

    /// Краткое описание для карточки
    #[serde(rename = "descricao")]
    pub description: String,

    /// Полное описание для страницы товара
    #[serde(rename = "descricaoDetalhada", default)]
    pub detailed_description: String,

    /// Цена в виде локализованной строки ("R$ 1.997,00", "Sob consulta")
    #[serde(rename = "preco")]
    pub price: String,

    #[serde(rename = "imagem", default)]
    pub image_url: String,

    #[serde(
        rename = "demoUrl",
        default,
        deserialize_with = "deserialize_optional_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub demo_url: Option<String>,

    #[serde(
        rename = "detalhesUrl",
        default,
        deserialize_with = "deserialize_optional_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub details_url: Option<String>,

    #[serde(rename = "compraUrl", default)]
    pub purchase_url: String,

    /// Список возможностей в порядке отображения
    #[serde(rename = "recursos", default)]
    pub features: Vec<String>,

    /// Имя иконки (например "FaRobot")
    #[serde(rename = "icone", default)]
    pub icon: String,

    /// Цвет карточки в hex ("#1abc9c")
    #[serde(rename = "cor", default)]
    pub color: String,

    /// Ключ категории; в документе обычно отсутствует и проставляется при слиянии
    #[serde(rename = "categoria", default)]
    pub category: String,
}

impl Product {
    /// Копия товара с проставленным ключом категории
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    /// Путь страницы товара в SPA
    pub fn details_path(&self) -> String {
        format!("/produto/{}/{}", self.category, self.slug)
    }

    /// Первые `n` возможностей для превью в карточке
    pub fn preview_features(&self, n: usize) -> &[String] {
        &self.features[..self.features.len().min(n)]
    }

    pub fn has_demo(&self) -> bool {
        self.demo_url.is_some()
    }
}

/// Пустая строка в `demoUrl`/`detalhesUrl` означает отсутствие ссылки
fn deserialize_optional_url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "id": "3",
        "nome": "Setup de Implantação",
        "slug": "setup-implantacao",
        "descricao": "Configuração completa",
        "descricaoDetalhada": "Tudo configurado",
        "preco": "R$ 399 (único)",
        "imagem": "https://example.com/a.jpg",
        "demoUrl": "",
        "compraUrl": "https://example.com/buy",
        "recursos": ["a", "b", "c", "d"],
        "icone": "FaCode",
        "cor": "#34495e"
    }"##;

    #[test]
    fn test_parses_document_record() {
        let p: Product = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(p.id.as_number(), Some(3));
        assert_eq!(p.name, "Setup de Implantação");
        assert_eq!(p.demo_url, None);
        assert!(!p.has_demo());
        assert_eq!(p.category, "");
        assert_eq!(p.preview_features(3), ["a", "b", "c"]);
    }

    #[test]
    fn test_numeric_and_text_ids() {
        let n: ProductId = serde_json::from_str("12").unwrap();
        let s: ProductId = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(n, s);

        let slug_id: ProductId = serde_json::from_str("\"site-pro\"").unwrap();
        assert_eq!(slug_id.as_number(), None);
    }

    #[test]
    fn test_details_path_uses_category() {
        let p: Product = serde_json::from_str(SAMPLE).unwrap();
        let p = p.with_category("barbearia");
        assert_eq!(p.details_path(), "/produto/barbearia/setup-implantacao");
    }

    #[test]
    fn test_preview_features_shorter_than_limit() {
        let mut p: Product = serde_json::from_str(SAMPLE).unwrap();
        p.features.truncate(1);
        assert_eq!(p.preview_features(3).len(), 1);
    }
}
