pub mod state;

use contracts::domain::a003_catalog::aggregate::Catalog;
use contracts::domain::a003_catalog::listing::{run_query, CategoryFilter, ListingPage};
use contracts::enums::{CategoryKey, SortOrder};
use leptos::prelude::*;

use super::card::ProductCard;
use crate::shared::browser::scroll_to_section;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Select;
use state::create_state;

/// id секции витрины, к ней ведут ссылки навигации
pub const CATALOG_SECTION_ID: &str = "categorias";

/// Заголовок и описание для серии товаров одной категории
pub fn section_heading(catalog: &Catalog, key: &str) -> (String, String) {
    match catalog.section(key) {
        Some(section) => (section.title.clone(), section.description.clone()),
        None => (
            CategoryKey::from_code(key)
                .map(|k| k.display_name().to_string())
                .unwrap_or_else(|| key.to_string()),
            String::new(),
        ),
    }
}

fn sort_options() -> Vec<(String, String)> {
    SortOrder::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect()
}

fn filter_options(catalog: &Catalog) -> Vec<(String, String)> {
    let mut options = vec![(
        CategoryFilter::All.code().to_string(),
        "Todas as categorias".to_string(),
    )];
    options.extend(catalog.category_options());
    options
}

/// Витрина: сортировка, фильтр по категории, страницы по 6 товаров,
/// сгруппированные по категориям
#[component]
pub fn CatalogList(#[prop(into)] catalog: Signal<Catalog>) -> impl IntoView {
    let state = create_state();

    let listing: Memo<ListingPage> =
        Memo::new(move |_| catalog.with(|c| run_query(c, &state.with(|s| s.query()))));

    let on_sort = Callback::new(move |code: String| {
        let sort = SortOrder::from_code(&code).unwrap_or_default();
        state.update(|s| s.set_sort(sort));
    });

    let on_filter = Callback::new(move |code: String| {
        state.update(|s| s.set_filter(CategoryFilter::from_code(&code)));
    });

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.page = page);
        scroll_to_section(CATALOG_SECTION_ID);
    });

    view! {
        <section id=CATALOG_SECTION_ID class="catalog-section">
            <div class="container">
                <div class="catalog-toolbar">
                    <Select
                        id="catalog-sort"
                        label="Ordenar por"
                        value=Signal::derive(move || state.with(|s| s.sort.code().to_string()))
                        on_change=on_sort
                        options=Signal::derive(sort_options)
                    />
                    <Select
                        id="catalog-filter"
                        label="Categoria"
                        value=Signal::derive(move || state.with(|s| s.filter.code().to_string()))
                        on_change=on_filter
                        options=Signal::derive(move || catalog.with(filter_options))
                    />
                </div>

                <Show
                    when=move || listing.with(|l| l.total_count > 0)
                    fallback=|| view! {
                        <p class="catalog-empty">"Nenhum produto disponível no momento."</p>
                    }
                >
                    {move || {
                        let groups = listing.with(|l| l.groups());
                        groups.into_iter().map(|group| {
                            let (title, description) =
                                catalog.with(|c| section_heading(c, &group.category));
                            view! {
                                <div class="catalog-group">
                                    <h2 class="section-title">{title}</h2>
                                    <p class="section-subtitle">{description}</p>
                                    <div class="product-grid">
                                        {group.products.into_iter().map(|product| view! {
                                            <ProductCard product=product />
                                        }).collect_view()}
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }}
                </Show>

                <PaginationControls
                    current_page=Signal::derive(move || listing.with(|l| l.page))
                    total_pages=Signal::derive(move || listing.with(|l| l.total_pages))
                    total_count=Signal::derive(move || listing.with(|l| l.total_count))
                    on_page_change=on_page_change
                />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_category::aggregate::Category;

    fn catalog() -> Catalog {
        let category = Category::from_json(
            r#"{"categoria": "tecnologia", "titulo": "Tecnologia", "descricao": "Automação", "produtos": []}"#,
        )
        .unwrap();
        Catalog::merge(vec![category])
    }

    #[test]
    fn test_section_heading_from_document() {
        assert_eq!(
            section_heading(&catalog(), "tecnologia"),
            ("Tecnologia".to_string(), "Automação".to_string())
        );
    }

    #[test]
    fn test_section_heading_falls_back_to_key_name() {
        let (title, description) = section_heading(&catalog(), "barbearia");
        assert_eq!(title, CategoryKey::Barbearia.display_name());
        assert!(description.is_empty());
    }

    #[test]
    fn test_filter_options_start_with_all() {
        let options = filter_options(&catalog());
        assert_eq!(options[0].0, "todas");
        assert_eq!(options[1], ("tecnologia".to_string(), "Tecnologia".to_string()));
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn test_sort_options_cover_every_order() {
        assert_eq!(sort_options().len(), SortOrder::all().len());
    }
}
