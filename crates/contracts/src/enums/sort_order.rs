use serde::{Deserialize, Serialize};

/// Порядок сортировки витрины
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Порядок документов, как есть
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    /// Сначала товары со скидкой
    DiscountFirst,
}

impl SortOrder {
    pub fn code(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevancia",
            SortOrder::PriceAsc => "menor-preco",
            SortOrder::PriceDesc => "maior-preco",
            SortOrder::DiscountFirst => "promocoes",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "Relevância",
            SortOrder::PriceAsc => "Menor preço",
            SortOrder::PriceDesc => "Maior preço",
            SortOrder::DiscountFirst => "Promoções primeiro",
        }
    }

    pub fn all() -> Vec<SortOrder> {
        vec![
            SortOrder::Relevance,
            SortOrder::PriceAsc,
            SortOrder::PriceDesc,
            SortOrder::DiscountFirst,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "relevancia" => Some(SortOrder::Relevance),
            "menor-preco" => Some(SortOrder::PriceAsc),
            "maior-preco" => Some(SortOrder::PriceDesc),
            "promocoes" => Some(SortOrder::DiscountFirst),
            _ => None,
        }
    }
}
