use contracts::domain::a003_catalog::listing::{CategoryFilter, ListingQuery, PAGE_SIZE};
use contracts::enums::SortOrder;
use leptos::prelude::*;

/// Состояние витрины. Живёт только в памяти страницы: при уходе со
/// страницы сбрасывается.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogListState {
    // Сортировка
    pub sort: SortOrder,

    // Фильтр по категории
    pub filter: CategoryFilter,

    // Пагинация, страница с нуля
    pub page: usize,
    pub page_size: usize,
}

impl Default for CatalogListState {
    fn default() -> Self {
        Self {
            sort: SortOrder::default(),
            filter: CategoryFilter::All,
            page: 0,
            page_size: PAGE_SIZE,
        }
    }
}

impl CatalogListState {
    /// Смена сортировки возвращает на первую страницу
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.page = 0;
    }

    /// Смена фильтра возвращает на первую страницу
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.page = 0;
    }

    pub fn query(&self) -> ListingQuery {
        ListingQuery {
            sort: self.sort,
            filter: self.filter.clone(),
            page: self.page,
            page_size: self.page_size,
        }
    }
}

pub fn create_state() -> RwSignal<CatalogListState> {
    RwSignal::new(CatalogListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = CatalogListState::default();
        assert_eq!(state.sort, SortOrder::Relevance);
        assert_eq!(state.filter, CategoryFilter::All);
        assert_eq!(state.page, 0);
        assert_eq!(state.page_size, 6);
    }

    #[test]
    fn test_sort_and_filter_reset_page() {
        let mut state = CatalogListState {
            page: 2,
            ..Default::default()
        };
        state.set_sort(SortOrder::PriceDesc);
        assert_eq!(state.page, 0);
        assert_eq!(state.query().sort, SortOrder::PriceDesc);

        state.page = 1;
        state.set_filter(CategoryFilter::Only("tecnologia".into()));
        assert_eq!(state.page, 0);
        assert_eq!(
            state.query().filter,
            CategoryFilter::Only("tecnologia".into())
        );
    }
}
