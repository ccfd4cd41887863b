//! Ценник карточки: имитация скидки и рассрочка.
//!
//! Скидка косметическая: никакого ценового источника за ней нет, правило
//! детерминированно зависит только от идентификатора товара.

use serde::{Deserialize, Serialize};

use super::aggregate::Product;
use crate::shared::price::{apply_discount, format_brl, installment_amount, parse_price};

/// Размер имитируемой скидки, %
pub const DISCOUNT_PERCENT: u8 = 15;
/// Товар со скидкой, если его числовой id делится на это число
pub const DISCOUNT_ID_DIVISOR: u64 = 3;
/// Количество платежей в строке рассрочки
pub const INSTALLMENTS: u32 = 12;

/// Рассчитанная скидка в сентаво
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedDiscount {
    pub original_cents: i64,
    pub discounted_cents: i64,
    pub percent: u8,
}

/// Скидка для товара, если правило срабатывает и цена разбирается
pub fn simulated_discount(product: &Product) -> Option<SimulatedDiscount> {
    let id = product.id.as_number()?;
    if id % DISCOUNT_ID_DIVISOR != 0 {
        return None;
    }
    let price = parse_price(&product.price)?;
    Some(SimulatedDiscount {
        original_cents: price.cents,
        discounted_cents: apply_discount(price.cents, DISCOUNT_PERCENT),
        percent: DISCOUNT_PERCENT,
    })
}

pub fn has_simulated_discount(product: &Product) -> bool {
    simulated_discount(product).is_some()
}

/// Готовые к показу строки ценника
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTag {
    /// Текущая цена; при ошибке разбора исходная строка как есть
    pub current: String,
    /// Зачёркнутая исходная цена (только при скидке)
    pub original: Option<String>,
    pub discount_percent: Option<u8>,
    /// "ou 12x de R$ 166,42", только для разовой цены без хвоста
    pub installments: Option<String>,
}

impl PriceTag {
    pub fn for_product(product: &Product) -> Self {
        let Some(price) = parse_price(&product.price) else {
            return Self::verbatim(&product.price);
        };

        let discount = simulated_discount(product);
        let effective_cents = discount.map_or(price.cents, |d| d.discounted_cents);

        let installments = price.suffix.is_empty().then(|| {
            format!(
                "ou {}x de {}",
                INSTALLMENTS,
                format_brl(installment_amount(effective_cents, INSTALLMENTS))
            )
        });

        match discount {
            Some(d) => Self {
                current: price.display_with(d.discounted_cents),
                original: Some(product.price.trim().to_string()),
                discount_percent: Some(d.percent),
                installments,
            },
            None => Self {
                current: product.price.trim().to_string(),
                original: None,
                discount_percent: None,
                installments,
            },
        }
    }

    fn verbatim(raw: &str) -> Self {
        Self {
            current: raw.to_string(),
            original: None,
            discount_percent: None,
            installments: None,
        }
    }

    pub fn has_discount(&self) -> bool {
        self.discount_percent.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::ProductId;

    fn product(id: &str, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Produto {}", id),
            slug: format!("produto-{}", id),
            description: String::new(),
            detailed_description: String::new(),
            price: price.to_string(),
            image_url: String::new(),
            demo_url: None,
            details_url: None,
            purchase_url: String::new(),
            features: vec![],
            icon: String::new(),
            color: String::new(),
            category: String::new(),
        }
    }

    #[test]
    fn test_discount_only_for_ids_divisible_by_three() {
        for id in 1..=12_u64 {
            let p = product(&id.to_string(), "R$ 100,00");
            let d = simulated_discount(&p);
            if id % 3 == 0 {
                let d = d.unwrap();
                assert_eq!(d.original_cents, 10000);
                assert_eq!(d.discounted_cents, 8500);
            } else {
                assert!(d.is_none(), "id {}", id);
            }
        }
    }

    #[test]
    fn test_no_discount_for_textual_id_or_unparsed_price() {
        assert!(!has_simulated_discount(&product("abc", "R$ 100,00")));
        assert!(!has_simulated_discount(&product("6", "Sob consulta")));
    }

    #[test]
    fn test_price_tag_with_discount_and_installments() {
        let tag = PriceTag::for_product(&product("3", "R$ 1.200,00"));
        assert_eq!(tag.current, "R$ 1.020,00");
        assert_eq!(tag.original.as_deref(), Some("R$ 1.200,00"));
        assert_eq!(tag.discount_percent, Some(15));
        assert_eq!(tag.installments.as_deref(), Some("ou 12x de R$ 85,00"));
    }

    #[test]
    fn test_price_tag_without_discount_keeps_original_text() {
        let tag = PriceTag::for_product(&product("1", "R$ 1.997"));
        assert_eq!(tag.current, "R$ 1.997");
        assert!(!tag.has_discount());
        assert_eq!(tag.installments.as_deref(), Some("ou 12x de R$ 166,42"));
    }

    #[test]
    fn test_price_tag_suffix_suppresses_installments() {
        let tag = PriceTag::for_product(&product("9", "R$ 97/mês"));
        assert_eq!(tag.current, "R$ 82,45/mês");
        assert_eq!(tag.installments, None);
    }

    #[test]
    fn test_price_tag_for_huge_amounts() {
        let tag = PriceTag::for_product(&product("3", "R$ 90.000.000.000.000.000,00"));
        assert_eq!(tag.current, "R$ 76.500.000.000.000.000,00");
        assert_eq!(
            tag.installments.as_deref(),
            Some("ou 12x de R$ 6.375.000.000.000.000,00")
        );

        let tag = PriceTag::for_product(&product("1", "R$ 50.000.000.000.000.000,00"));
        assert_eq!(
            tag.installments.as_deref(),
            Some("ou 12x de R$ 4.166.666.666.666.666,67")
        );
    }

    #[test]
    fn test_price_tag_unparsed_is_verbatim() {
        let tag = PriceTag::for_product(&product("3", "Sob consulta"));
        assert_eq!(tag.current, "Sob consulta");
        assert_eq!(tag.original, None);
        assert_eq!(tag.discount_percent, None);
        assert_eq!(tag.installments, None);
    }
}
