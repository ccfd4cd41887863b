use contracts::domain::a003_catalog::aggregate::Catalog;
use contracts::shared::contact::CONTACT;
use contracts::shared::loading::{BOOT, DONE};
use contracts::shared::outbound::{mailto_link, tel_link, whatsapp_chat_link};
use leptos::prelude::*;

use crate::domain::a001_catalog::ui::list::{CatalogList, CATALOG_SECTION_ID};
use crate::domain::a001_catalog::ui::loading::{start_catalog_load, LoadingScreen};
use crate::layout::footer::Footer;
use crate::layout::header::NavBar;
use crate::shared::browser::scroll_to_section;
use crate::shared::icons::icon;

/// Карточки секции "Sobre": (иконка, заголовок, текст)
const ABOUT_CARDS: [(&str, &str, &str); 4] = [
    ("bolt", "Performance", "Sistemas otimizados para máxima velocidade e eficiência"),
    ("mobile", "Responsivo", "Funciona perfeitamente em todos os dispositivos"),
    ("tools", "Manutenção", "Suporte contínuo e atualizações regulares"),
    ("lightbulb", "Inovação", "Soluções com as mais recentes tecnologias"),
];

/// Главная: пока каталог грузится, вместо страницы экран загрузки
#[component]
pub fn HomePage() -> impl IntoView {
    let stage = RwSignal::new(Some(BOOT));
    let catalog = RwSignal::new(Catalog::default());

    start_catalog_load(stage, catalog);

    view! {
        <Show
            when=move || stage.with(Option::is_none)
            fallback=move || view! {
                <LoadingScreen stage=Signal::derive(move || stage.get().unwrap_or(DONE)) />
            }
        >
            <Hero />
            <NavBar />
            <main class="content">
                <About />
                <CatalogList catalog=catalog />
                <CallToAction />
                <Contact />
            </main>
            <Footer />
        </Show>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <div class="hero__overlay"></div>
            <div class="hero__content">
                <h1 class="hero__title">"Lazarus Tecnologia"</h1>
                <p class="hero__subtitle">"Soluções digitais inteligentes para seu negócio crescer"</p>
                <button class="hero__button" on:click=move |_| scroll_to_section(CATALOG_SECTION_ID)>
                    "Ver Produtos " {icon("arrow-right")}
                </button>
            </div>
        </header>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="sobre" class="about-section">
            <div class="container">
                <h2 class="section-title">"Por que escolher a Lazarus?"</h2>
                <p class="about-section__text">
                    "Somos especialistas em transformar ideias em soluções digitais eficientes. \
                     Com tecnologia de ponta e design intuitivo, criamos ferramentas que realmente \
                     fazem a diferença no seu negócio."
                </p>
                <div class="about-grid">
                    {ABOUT_CARDS.iter().map(|(icon_name, title, text)| view! {
                        <div class="about-card">
                            <div class="about-card__icon">{icon(icon_name)}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta-section">
            <div class="container">
                <h2 class="cta-section__title">"Pronto para transformar seu negócio?"</h2>
                <p class="cta-section__text">"Entre em contato agora mesmo e receba uma consultoria gratuita"</p>
                <a
                    class="cta-section__button"
                    href=whatsapp_chat_link(CONTACT.whatsapp_phone)
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {icon("whatsapp")} " Falar no WhatsApp"
                </a>
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section id="contato" class="contact-section">
            <div class="container">
                <h2 class="section-title">"Entre em Contato"</h2>
                <div class="contact-grid">
                    <div class="contact-info">
                        <h3>"Informações de Contato"</h3>
                        <div class="contact-item">
                            {icon("whatsapp")}
                            <div>
                                <h4>"WhatsApp"</h4>
                                <a
                                    href=whatsapp_chat_link(CONTACT.whatsapp_phone)
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {CONTACT.phone_display}
                                </a>
                            </div>
                        </div>
                        <div class="contact-item">
                            {icon("phone")}
                            <div>
                                <h4>"Telefone"</h4>
                                <a href=tel_link(CONTACT.whatsapp_phone)>{CONTACT.phone_display}</a>
                            </div>
                        </div>
                        <div class="contact-item">
                            {icon("envelope")}
                            <div>
                                <h4>"Email"</h4>
                                <a href=mailto_link(CONTACT.email)>{CONTACT.email}</a>
                            </div>
                        </div>
                    </div>
                    <div class="contact-location">
                        <h3>"Onde estamos"</h3>
                        <div class="contact-item">
                            {icon("map-pin")}
                            <div>
                                <p>{CONTACT.location}</p>
                                <p>{CONTACT.coverage}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
