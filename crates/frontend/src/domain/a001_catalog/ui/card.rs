use contracts::domain::a001_product::aggregate::Product;
use contracts::shared::outbound::OutboundAction;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::actions::dispatch;
use crate::shared::components::price_tag::PriceTagView;
use crate::shared::icons::icon;

/// Сколько пунктов `recursos` видно на карточке
pub const CARD_FEATURES: usize = 3;

/// Фон изображения товара с подложкой цвета товара
pub fn image_style(product: &Product) -> String {
    format!(
        "background-image: url('{}'); background-color: {}20;",
        product.image_url, product.color
    )
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let navigate = use_navigate();
    let details_path = product.details_path();

    let demo = OutboundAction::demo(&product);
    let purchase = OutboundAction::purchase(&product);
    let quote = OutboundAction::quote(&product);

    let features = product.preview_features(CARD_FEATURES).to_vec();
    let style = image_style(&product);
    let name = product.name.clone();
    let description = product.description.clone();

    view! {
        <article class="product-card">
            <div class="product-card__image" style=style></div>
            <div class="product-card__body">
                <h3 class="product-card__name">{name}</h3>
                <p class="product-card__description">{description}</p>
                <ul class="product-card__features">
                    {features.into_iter().map(|feature| view! {
                        <li>{icon("check")}<span>{feature}</span></li>
                    }).collect_view()}
                </ul>
                <PriceTagView product=product />
                <div class="product-card__actions">
                    {demo.map(|action| view! {
                        <button class="btn btn--outline" on:click=move |_| dispatch(&action)>
                            {icon("eye")} " Ver Demo"
                        </button>
                    })}
                    <button
                        class="btn btn--secondary"
                        on:click=move |_| navigate(&details_path, Default::default())
                    >
                        {icon("info")} " Detalhes"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| dispatch(&purchase)>
                        {icon("cart")} " Comprar"
                    </button>
                    <button class="btn btn--whatsapp" on:click=move |_| dispatch(&quote)>
                        {icon("whatsapp")} " Solicitar Orçamento"
                    </button>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_style_tints_with_product_color() {
        let product: Product = serde_json::from_str(
            r##"{"id": 1, "nome": "Site", "slug": "site", "descricao": "", "preco": "R$ 10,00",
                "imagem": "/img/site.png", "cor": "#ff6b35"}"##,
        )
        .unwrap();
        assert_eq!(
            image_style(&product),
            "background-image: url('/img/site.png'); background-color: #ff6b3520;"
        );
    }
}
