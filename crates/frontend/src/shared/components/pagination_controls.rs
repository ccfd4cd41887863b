use crate::shared::icons::icon;
use leptos::prelude::*;

/// Текст счётчика: страница с единицы, всего страниц, всего товаров
pub fn page_label(current_page: usize, total_pages: usize, total_count: usize) -> String {
    format!("{} / {} ({})", current_page + 1, total_pages.max(1), total_count)
}

/// PaginationControls: первая, предыдущая, следующая, последняя страница
///
/// Кнопки назад неактивны на первой странице, вперёд на последней.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let on_last = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=move || current_page.get() == 0
                title="Primeira página"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || page_label(current_page.get(), total_pages.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=on_last
                title="Próxima página"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=on_last
                title="Última página"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_label_is_one_based() {
        assert_eq!(page_label(0, 3, 14), "1 / 3 (14)");
        assert_eq!(page_label(2, 3, 14), "3 / 3 (14)");
    }

    #[test]
    fn test_page_label_empty_listing() {
        assert_eq!(page_label(0, 0, 0), "1 / 1 (0)");
    }
}
