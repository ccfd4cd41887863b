use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;

use crate::domain::a001_catalog::api;

/// Ответ применяется, только если он на последний запрос.
/// `None` означает, что страница уже закрыта.
fn should_apply(current_generation: Option<u64>, request_id: u64) -> bool {
    current_generation == Some(request_id)
}

/// ViewModel страницы товара
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub product: RwSignal<Option<Product>>,
    pub loading: RwSignal<bool>,
    /// Номер последнего запроса; ответы на более ранние отбрасываются
    generation: RwSignal<u64>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            product: RwSignal::new(None),
            loading: RwSignal::new(true),
            generation: RwSignal::new(0),
        }
    }

    /// Загружает товар по категории и slug. Кэша нет: документ категории
    /// запрашивается при каждом переходе.
    pub fn load(&self, category: String, slug: String) {
        let request_id = self.generation.get_untracked() + 1;
        self.generation.set(request_id);
        self.loading.set(true);
        self.product.set(None);

        let product = self.product;
        let loading = self.loading;
        let generation = self.generation;

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_product(&category, &slug).await;

            if !should_apply(generation.try_get_untracked(), request_id) {
                return;
            }

            let found = match result {
                Ok(Some(p)) => Some(p),
                Ok(None) => {
                    log::warn!("Product {}/{} not found", category, slug);
                    None
                }
                Err(e) => {
                    log::error!("{}", e);
                    None
                }
            };

            let _ = product.try_set(found);
            let _ = loading.try_set(false);
        });
    }
}

impl Default for ProductDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_response_is_applied() {
        assert!(should_apply(Some(3), 3));
    }

    #[test]
    fn test_superseded_response_is_dropped() {
        // Быстрый переход A -> B: ответ A приходит после запроса B
        assert!(!should_apply(Some(2), 1));
    }

    #[test]
    fn test_response_after_unmount_is_dropped() {
        assert!(!should_apply(None, 1));
    }
}
