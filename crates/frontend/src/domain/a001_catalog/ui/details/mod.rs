mod view;
mod view_model;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
pub use view::ProductDetails;

/// Страница `/produto/:categoria/:slug`
#[component]
pub fn ProductDetailsRoute() -> impl IntoView {
    let params = use_params_map();
    let category = Signal::derive(move || params.with(|p| p.get("categoria").unwrap_or_default()));
    let slug = Signal::derive(move || params.with(|p| p.get("slug").unwrap_or_default()));

    view! {
        <ProductDetails category=category slug=slug />
    }
}
