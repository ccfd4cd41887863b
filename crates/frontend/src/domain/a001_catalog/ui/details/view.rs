use super::view_model::ProductDetailsViewModel;
use crate::domain::a001_catalog::ui::actions::dispatch;
use crate::domain::a001_catalog::ui::card::image_style;
use crate::layout::footer::Footer;
use crate::layout::header::NavBar;
use crate::shared::browser::{history_back, scroll_to_top};
use crate::shared::components::price_tag::PriceTagView;
use crate::shared::components::ui::Badge;
use crate::shared::icons::{icon, icon_for};
use contracts::domain::a001_product::aggregate::Product;
use contracts::enums::CategoryKey;
use contracts::shared::contact::CONTACT;
use contracts::shared::outbound::{whatsapp_chat_link, OutboundAction};
use leptos::prelude::*;

const FAQ: [(&str, &str); 3] = [
    (
        "Como funciona o processo de compra?",
        "Entre em contato via WhatsApp, nosso time irá entender suas necessidades e configurar a solução ideal para você.",
    ),
    (
        "Quanto tempo para entrega?",
        "Sites estáticos: 2-3 dias úteis. Sistemas completos: 5-7 dias úteis após aprovação do projeto.",
    ),
    (
        "Oferecem garantia?",
        "Sim, todos nossos produtos têm garantia de 30 dias para funcionamento correto.",
    ),
];

#[component]
pub fn ProductDetails(
    #[prop(into)] category: Signal<String>,
    #[prop(into)] slug: Signal<String>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new();

    // Перезагрузка при каждой смене маршрута
    Effect::new(move |_| {
        vm.load(category.get(), slug.get());
        scroll_to_top();
    });

    move || {
        if vm.loading.get() {
            return view! {
                <div class="details-loading">
                    <div class="spinner"></div>
                    <p>"Carregando produto..."</p>
                </div>
            }
            .into_any();
        }

        match vm.product.get() {
            Some(product) => view! { <ProductDetailsContent product=product /> }.into_any(),
            None => view! {
                <div class="details-not-found">
                    <h2>"Produto não encontrado"</h2>
                    <button class="btn btn--back" on:click=move |_| history_back()>
                        {icon("arrow-left")} " Voltar"
                    </button>
                </div>
            }
            .into_any(),
        }
    }
}

#[component]
fn ProductDetailsContent(product: Product) -> impl IntoView {
    let demo = OutboundAction::demo(&product);
    let purchase = OutboundAction::purchase(&product);
    let style = image_style(&product);
    let accent = format!("color: {}", product.color);
    let category_name = CategoryKey::from_code(&product.category)
        .map(|k| k.display_name().to_string())
        .unwrap_or_else(|| product.category.clone());

    view! {
        <div class="product-details">
            <NavBar back=true />

            <div class="container">
                <h1 class="product-details__title">{product.name.clone()}</h1>
                <Badge variant="category">{category_name}</Badge>

                <div class="product-details__grid">
                    <div class="product-details__media">
                        <div class="product-details__image" style=style></div>
                        <div class="product-details__buy">
                            <PriceTagView product=product.clone() large=true />
                            <div class="product-details__actions">
                                {demo.map(|action| view! {
                                    <button class="btn btn--outline" on:click=move |_| dispatch(&action)>
                                        {icon("eye")} " Ver Demo Online"
                                    </button>
                                })}
                                <button class="btn btn--primary" on:click=move |_| dispatch(&purchase)>
                                    {icon("cart")} " Comprar Agora"
                                </button>
                                <a
                                    class="btn btn--whatsapp"
                                    href=whatsapp_chat_link(CONTACT.whatsapp_phone)
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {icon("whatsapp")} " Falar no WhatsApp"
                                </a>
                            </div>
                        </div>
                    </div>

                    <div class="product-details__info">
                        <div class="product-details__block">
                            <h2>"Descrição"</h2>
                            <p class="product-details__description">{product.description.clone()}</p>
                            <p class="product-details__long">{product.detailed_description.clone()}</p>
                        </div>

                        <div class="product-details__block">
                            <h2>"Recursos Incluídos"</h2>
                            <ul class="product-details__features">
                                {product.features.iter().map(|feature| view! {
                                    <li>{icon("check")}<span>{feature.clone()}</span></li>
                                }).collect_view()}
                            </ul>
                        </div>

                        <div class="product-details__block">
                            <h2>"Benefícios"</h2>
                            <div class="benefits-grid">
                                <div class="benefit-card">
                                    <div class="benefit-card__icon" style=accent.clone()>{icon_for(&product.icon)}</div>
                                    <h3>"Prático"</h3>
                                    <p>"Fácil de usar e implementar"</p>
                                </div>
                                <div class="benefit-card">
                                    <div class="benefit-card__icon" style=accent.clone()>{icon("calendar")}</div>
                                    <h3>"Suporte"</h3>
                                    <p>"Atendimento especializado"</p>
                                </div>
                                <div class="benefit-card">
                                    <div class="benefit-card__icon" style=accent>{icon("robot")}</div>
                                    <h3>"Moderno"</h3>
                                    <p>"Tecnologia de ponta"</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="faq">
                    <h2>"Perguntas Frequentes"</h2>
                    {FAQ.iter().map(|(question, answer)| view! {
                        <div class="faq__item">
                            <h3>{*question}</h3>
                            <p>{*answer}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>

            <Footer compact=true />
        </div>
    }
}
