use contracts::shared::contact::CONTACT;
use contracts::shared::outbound::{mailto_link, whatsapp_chat_link};
use leptos::prelude::*;

use crate::layout::header::NAV_SECTIONS;
use crate::shared::browser::{current_year, scroll_to_section};
use crate::shared::icons::icon;

/// Подвал сайта. `compact` оставляет только логотип и копирайт.
#[component]
pub fn Footer(#[prop(optional)] compact: bool) -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer__content">
                    <div class="footer__logo">
                        <span class="logo-text">"LAZARUS"</span>
                        <span class="logo-tech">"TECHNOLOGY"</span>
                        <p class="footer__slogan">"Transformando ideias em soluções digitais"</p>
                    </div>

                    {(!compact).then(|| view! {
                        <div class="footer__links">
                            <h4>"Links Rápidos"</h4>
                            {NAV_SECTIONS.iter().map(|(id, label)| {
                                let id = *id;
                                view! {
                                    <button on:click=move |_| scroll_to_section(id)>{*label}</button>
                                }
                            }).collect_view()}
                        </div>
                        <div class="footer__social">
                            <h4>"Conecte-se"</h4>
                            <div class="social-icons">
                                <a
                                    class="social-icon"
                                    href=whatsapp_chat_link(CONTACT.whatsapp_phone)
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {icon("whatsapp")}
                                </a>
                                <a
                                    class="social-icon"
                                    href=CONTACT.instagram_url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {icon("instagram")}
                                </a>
                                <a class="social-icon" href=mailto_link(CONTACT.email)>
                                    {icon("envelope")}
                                </a>
                            </div>
                        </div>
                    })}
                </div>

                <div class="footer__bottom">
                    <p>{format!("© {} {}. Todos os direitos reservados.", year, CONTACT.company)}</p>
                    <p>"Desenvolvido para transformar negócios"</p>
                </div>
            </div>
        </footer>
    }
}
