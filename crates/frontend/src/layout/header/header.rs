use contracts::shared::contact::CONTACT;
use contracts::shared::outbound::whatsapp_chat_link;
use leptos::prelude::*;

use crate::shared::browser::{history_back, scroll_to_section, scroll_to_top};
use crate::shared::icons::icon;

/// Секции главной страницы: (id, подпись в меню)
pub const NAV_SECTIONS: [(&str, &str); 3] = [
    ("categorias", "Produtos"),
    ("sobre", "Sobre"),
    ("contato", "Contato"),
];

/// Закреплённая навигация. На главной ведёт к секциям, на странице
/// товара показывает кнопку "Voltar".
#[component]
pub fn NavBar(#[prop(optional)] back: bool) -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__logo" on:click=move |_| scroll_to_top()>
                    <span class="logo-text">"LAZARUS"</span>
                    <span class="logo-tech">"TECH"</span>
                </div>

                <div class="navbar__menu">
                    {if back {
                        view! {
                            <button class="btn btn--back" on:click=move |_| history_back()>
                                {icon("arrow-left")} " Voltar"
                            </button>
                        }
                        .into_any()
                    } else {
                        NAV_SECTIONS
                            .iter()
                            .map(|(id, label)| {
                                let id = *id;
                                view! {
                                    <button class="navbar__link" on:click=move |_| scroll_to_section(id)>
                                        {*label}
                                    </button>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                    <a
                        class="navbar__whatsapp"
                        href=whatsapp_chat_link(CONTACT.whatsapp_phone)
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {icon("whatsapp")} " Fale Conosco"
                    </a>
                </div>
            </div>
        </nav>
    }
}
