//! Витрина: фильтр по категории, сортировка и постраничный вывод
//! поверх загруженного каталога.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::aggregate::Catalog;
use crate::domain::a001_product::aggregate::Product;
use crate::domain::a001_product::pricing::has_simulated_discount;
use crate::enums::SortOrder;
use crate::shared::price::parse_price;

/// Фиксированный размер страницы витрины
pub const PAGE_SIZE: usize = 6;

const ALL_CATEGORIES_CODE: &str = "todas";

/// Фильтр по категории: все или одна
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn code(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_CODE,
            CategoryFilter::Only(key) => key,
        }
    }

    pub fn from_code(code: &str) -> Self {
        if code.is_empty() || code == ALL_CATEGORIES_CODE {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(code.to_string())
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(key) => product.category == *key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    pub sort: SortOrder,
    pub filter: CategoryFilter,
    /// Номер страницы с нуля
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            sort: SortOrder::default(),
            filter: CategoryFilter::default(),
            page: 0,
            page_size: PAGE_SIZE,
        }
    }
}

/// Подряд идущие товары одной категории на странице
#[derive(Debug, Clone, PartialEq)]
pub struct ProductGroup {
    pub category: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingPage {
    pub items: Vec<Product>,
    /// Фактическая страница после ограничения диапазоном
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl ListingPage {
    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        self.page + 1 >= self.total_pages
    }

    /// Группирует товары страницы в непрерывные серии по категории
    pub fn groups(&self) -> Vec<ProductGroup> {
        let mut groups: Vec<ProductGroup> = Vec::new();
        for product in &self.items {
            match groups.last_mut() {
                Some(group) if group.category == product.category => {
                    group.products.push(product.clone())
                }
                _ => groups.push(ProductGroup {
                    category: product.category.clone(),
                    products: vec![product.clone()],
                }),
            }
        }
        groups
    }
}

/// Количество страниц: ceil(total / page_size)
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Ограничивает номер страницы диапазоном [0, total_pages)
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages.saturating_sub(1))
}

/// Устойчивая сортировка товаров.
///
/// Товары без разбираемой цены при сортировке по цене уходят в конец
/// в любом направлении, сохраняя взаимный порядок.
pub fn sort_products(items: &mut Vec<Product>, order: SortOrder) {
    match order {
        SortOrder::Relevance => {}
        SortOrder::PriceAsc | SortOrder::PriceDesc => {
            let mut keyed: Vec<(Option<i64>, Product)> = items
                .drain(..)
                .map(|p| (parse_price(&p.price).map(|x| x.cents), p))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| compare_prices(*a, *b, order == SortOrder::PriceAsc));
            items.extend(keyed.into_iter().map(|(_, p)| p));
        }
        SortOrder::DiscountFirst => {
            let mut keyed: Vec<(bool, Product)> = items
                .drain(..)
                .map(|p| (has_simulated_discount(&p), p))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| b.cmp(a));
            items.extend(keyed.into_iter().map(|(_, p)| p));
        }
    }
}

fn compare_prices(a: Option<i64>, b: Option<i64>, ascending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            if ascending {
                a.cmp(&b)
            } else {
                b.cmp(&a)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Применяет фильтр, сортировку и пагинацию к каталогу
pub fn run_query(catalog: &Catalog, query: &ListingQuery) -> ListingPage {
    let mut items: Vec<Product> = catalog
        .flatten()
        .filter(|p| query.filter.matches(p))
        .cloned()
        .collect();
    sort_products(&mut items, query.sort);

    let total_count = items.len();
    let page_size = query.page_size.max(1);
    let total_pages = page_count(total_count, page_size);
    let page = clamp_page(query.page, total_pages);

    let items = items
        .into_iter()
        .skip(page * page_size)
        .take(page_size)
        .collect();

    ListingPage {
        items,
        page,
        page_size,
        total_count,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_category::aggregate::Category;

    fn category(key: &str, rows: &[(u32, &str)]) -> Category {
        let products: Vec<String> = rows
            .iter()
            .map(|(id, price)| {
                format!(
                    r#"{{"id": {id}, "nome": "P{id}", "slug": "p{id}", "descricao": "", "preco": "{price}"}}"#,
                    id = id,
                    price = price
                )
            })
            .collect();
        Category::from_json(&format!(
            r#"{{"categoria": "{}", "titulo": "{}", "descricao": "", "produtos": [{}]}}"#,
            key,
            key,
            products.join(",")
        ))
        .unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::merge(vec![
            category(
                "barbearia",
                &[(1, "R$ 97/mês"), (2, "R$ 147/mês"), (3, "R$ 399 (único)"), (4, "R$ 1.997")],
            ),
            category("tecnologia", &[(5, "R$ 59/mês"), (6, "Sob consulta"), (7, "R$ 249")]),
            category("consultoria", &[(8, "R$ 197"), (9, "R$ 89"), (10, "R$ 97,00")]),
        ])
    }

    fn names(items: &[Product]) -> Vec<String> {
        items.iter().map(|p| p.name.clone()).collect()
    }

    fn query(sort: SortOrder, filter: CategoryFilter, page_size: usize) -> ListingQuery {
        ListingQuery {
            sort,
            filter,
            page: 0,
            page_size,
        }
    }

    #[test]
    fn test_relevance_keeps_catalog_order() {
        let page = run_query(&catalog(), &query(SortOrder::Relevance, CategoryFilter::All, 100));
        assert_eq!(page.total_count, 10);
        assert_eq!(names(&page.items)[..3], ["P1", "P2", "P3"]);
    }

    #[test]
    fn test_price_ascending_is_stable_and_unpriced_last() {
        let page = run_query(&catalog(), &query(SortOrder::PriceAsc, CategoryFilter::All, 100));
        assert_eq!(
            names(&page.items),
            ["P5", "P9", "P1", "P10", "P2", "P8", "P7", "P3", "P4", "P6"]
        );
    }

    #[test]
    fn test_price_descending_is_stable_and_unpriced_last() {
        let page = run_query(&catalog(), &query(SortOrder::PriceDesc, CategoryFilter::All, 100));
        assert_eq!(
            names(&page.items),
            ["P4", "P3", "P7", "P8", "P2", "P1", "P10", "P9", "P5", "P6"]
        );
    }

    #[test]
    fn test_price_order_consistent_with_parsed_values() {
        let page = run_query(&catalog(), &query(SortOrder::PriceAsc, CategoryFilter::All, 100));
        let prices: Vec<i64> = page
            .items
            .iter()
            .filter_map(|p| parse_price(&p.price).map(|x| x.cents))
            .collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_discount_first_keeps_relative_order() {
        let page = run_query(
            &catalog(),
            &query(SortOrder::DiscountFirst, CategoryFilter::All, 100),
        );
        // 3 и 9 со скидкой; 6 без скидки, т.к. цена не разбирается
        assert_eq!(
            names(&page.items),
            ["P3", "P9", "P1", "P2", "P4", "P5", "P6", "P7", "P8", "P10"]
        );
    }

    #[test]
    fn test_category_filter() {
        let page = run_query(
            &catalog(),
            &query(
                SortOrder::Relevance,
                CategoryFilter::Only("tecnologia".into()),
                100,
            ),
        );
        assert_eq!(names(&page.items), ["P5", "P6", "P7"]);

        let none = run_query(
            &catalog(),
            &query(SortOrder::Relevance, CategoryFilter::Only("x".into()), 100),
        );
        assert_eq!(none.total_count, 0);
        assert_eq!(none.total_pages, 0);
        assert!(none.is_first() && none.is_last());
    }

    #[test]
    fn test_pagination_bounds() {
        let mut q = query(SortOrder::Relevance, CategoryFilter::All, 4);
        let first = run_query(&catalog(), &q);
        assert_eq!(first.total_pages, 3);
        assert!(first.is_first());
        assert!(!first.is_last());

        q.page = 2;
        let last = run_query(&catalog(), &q);
        assert_eq!(names(&last.items), ["P9", "P10"]);
        assert!(last.is_last());

        q.page = 99;
        let clamped = run_query(&catalog(), &q);
        assert_eq!(clamped.page, 2);
        assert_eq!(clamped.items, last.items);
    }

    #[test]
    fn test_page_count_and_clamp() {
        assert_eq!(page_count(0, 6), 0);
        assert_eq!(page_count(6, 6), 1);
        assert_eq!(page_count(7, 6), 2);
        assert_eq!(page_count(5, 0), 0);
        assert_eq!(clamp_page(5, 0), 0);
        assert_eq!(clamp_page(5, 3), 2);
        assert_eq!(clamp_page(1, 3), 1);
    }

    #[test]
    fn test_groups_are_consecutive_runs() {
        let page = run_query(&catalog(), &query(SortOrder::PriceAsc, CategoryFilter::All, 4));
        // P5 (tecnologia), P9 (consultoria), P1 (barbearia), P10 (consultoria)
        let groups: Vec<(String, usize)> = page
            .groups()
            .into_iter()
            .map(|g| (g.category, g.products.len()))
            .collect();
        assert_eq!(
            groups,
            vec![
                ("tecnologia".to_string(), 1),
                ("consultoria".to_string(), 1),
                ("barbearia".to_string(), 1),
                ("consultoria".to_string(), 1),
            ]
        );

        let relevance = run_query(&catalog(), &query(SortOrder::Relevance, CategoryFilter::All, 6));
        assert_eq!(relevance.groups().len(), 2);
    }

    #[test]
    fn test_filter_codes() {
        assert_eq!(CategoryFilter::from_code("todas"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_code(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_code("barbearia").code(),
            "barbearia"
        );
    }
}
