use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="details-not-found">
            <h2>"Página não encontrada"</h2>
            <A href="/" attr:class="btn btn--back">
                {icon("arrow-left")} " Voltar ao início"
            </A>
        </div>
    }
}
