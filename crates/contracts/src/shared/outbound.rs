//! Внешние ссылки: WhatsApp, демо и покупка, mailto/tel.
//!
//! Ссылки из документов берутся как есть, проверяется только наличие.

use serde::{Deserialize, Serialize};

use super::contact::CONTACT;
use crate::domain::a001_product::aggregate::Product;

const WHATSAPP_BASE: &str = "https://wa.me";

/// Текст запроса коммерческого предложения по товару
pub fn quote_request_message(product_name: &str) -> String {
    format!(
        "Olá! Gostaria de solicitar um orçamento para: {}",
        product_name
    )
}

/// Чат WhatsApp с предзаполненным сообщением
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE,
        phone,
        urlencoding::encode(message)
    )
}

/// Чат WhatsApp без текста
pub fn whatsapp_chat_link(phone: &str) -> String {
    format!("{}/{}", WHATSAPP_BASE, phone)
}

pub fn mailto_link(email: &str) -> String {
    format!("mailto:{}", email)
}

pub fn tel_link(phone: &str) -> String {
    format!("tel:{}", phone)
}

/// Действие, открывающее внешнюю ссылку в новой вкладке
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutboundAction {
    /// Запрос предложения по товару в WhatsApp
    QuoteRequest { product_name: String },
    Demo { url: String },
    Purchase { url: String },
}

impl OutboundAction {
    pub fn quote(product: &Product) -> Self {
        OutboundAction::QuoteRequest {
            product_name: product.name.clone(),
        }
    }

    /// Демо есть не у всех товаров
    pub fn demo(product: &Product) -> Option<Self> {
        product
            .demo_url
            .clone()
            .map(|url| OutboundAction::Demo { url })
    }

    pub fn purchase(product: &Product) -> Self {
        OutboundAction::Purchase {
            url: product.purchase_url.clone(),
        }
    }

    /// Итоговый URL; `None` для пустой ссылки, открывать нечего
    pub fn url(&self) -> Option<String> {
        match self {
            OutboundAction::QuoteRequest { product_name } => Some(whatsapp_link(
                CONTACT.whatsapp_phone,
                &quote_request_message(product_name),
            )),
            OutboundAction::Demo { url } | OutboundAction::Purchase { url } => {
                let url = url.trim();
                (!url.is_empty()).then(|| url.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_link_encodes_message() {
        let link = whatsapp_link("5582996878817", &quote_request_message("Site & Logo"));
        assert_eq!(
            link,
            "https://wa.me/5582996878817?text=Ol%C3%A1%21%20Gostaria%20de%20solicitar%20um%20or%C3%A7amento%20para%3A%20Site%20%26%20Logo"
        );
    }

    #[test]
    fn test_contact_links() {
        assert_eq!(whatsapp_chat_link("55"), "https://wa.me/55");
        assert_eq!(mailto_link("a@b.com"), "mailto:a@b.com");
        assert_eq!(tel_link("5582996878817"), "tel:5582996878817");
    }

    #[test]
    fn test_record_urls_taken_verbatim() {
        let demo = OutboundAction::Demo {
            url: " https://demo.example.com/x?y=1 ".into(),
        };
        assert_eq!(demo.url().as_deref(), Some("https://demo.example.com/x?y=1"));

        let blank = OutboundAction::Purchase { url: "  ".into() };
        assert_eq!(blank.url(), None);
    }

    #[test]
    fn test_quote_uses_fixed_phone() {
        let action = OutboundAction::QuoteRequest {
            product_name: "Lazarus CMS".into(),
        };
        let url = action.url().unwrap();
        assert!(url.starts_with("https://wa.me/5582996878817?text="));
        assert!(url.ends_with("Lazarus%20CMS"));
    }
}
