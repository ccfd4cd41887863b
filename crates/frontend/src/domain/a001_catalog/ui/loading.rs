//! Экран загрузки каталога с этапами прогресса.

use contracts::domain::a003_catalog::aggregate::Catalog;
use contracts::shared::loading::{
    LoadingStage, BOOT, DONE, FETCHING, FINISHING, MERGING, MODULES, STAGES, WAITING,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_catalog::api;
use crate::shared::icons::icon;

/// Показывает этап и выдерживает его паузу.
/// `false`, если экран уже размонтирован и продолжать незачем.
async fn show_stage(stage: RwSignal<Option<LoadingStage>>, next: LoadingStage) -> bool {
    if stage.try_set(Some(next)).is_some() {
        return false;
    }
    if next.pause_ms > 0 {
        TimeoutFuture::new(next.pause_ms).await;
    }
    true
}

/// Этапы до запроса документов
const BEFORE_FETCH: [LoadingStage; 3] = [BOOT, MODULES, FETCHING];

/// Этапы после ответа. Ошибка загрузки завершает экран сразу, без
/// оставшихся декоративных пауз.
fn stages_after_fetch(loaded: bool) -> &'static [LoadingStage] {
    const AFTER_SUCCESS: [LoadingStage; 3] = [MERGING, FINISHING, DONE];
    if loaded {
        &AFTER_SUCCESS
    } else {
        &[]
    }
}

/// Загружает каталог, двигая полосу прогресса. При ошибке каталог
/// остаётся пустым.
pub fn start_catalog_load(stage: RwSignal<Option<LoadingStage>>, catalog: RwSignal<Catalog>) {
    spawn_local(async move {
        for next in BEFORE_FETCH {
            if !show_stage(stage, next).await {
                return;
            }
        }

        let request = api::fetch_catalog();
        if !show_stage(stage, WAITING).await {
            return;
        }

        let loaded = match request.await {
            Ok(loaded) => {
                if loaded.is_empty() {
                    log::warn!("Catalog loaded without products");
                } else {
                    log::info!(
                        "Catalog loaded: {} categories, {} products",
                        loaded.sections.len(),
                        loaded.product_count()
                    );
                }
                if catalog.try_set(loaded).is_some() {
                    return;
                }
                true
            }
            Err(e) => {
                log::error!("{}", e);
                false
            }
        };

        for next in stages_after_fetch(loaded) {
            if !show_stage(stage, *next).await {
                return;
            }
        }

        let _ = stage.try_set(None);
    });
}

/// Иконки состояния под полосой: (иконка, подпись, анимация)
const STATUS_ICONS: [(&str, &str, &str); 3] = [
    ("cogs", "Processando", "spinning"),
    ("server", "Conectando", "pulsing"),
    ("rocket", "Otimizando", "floating"),
];

#[component]
pub fn LoadingScreen(#[prop(into)] stage: Signal<LoadingStage>) -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__logo">
                <span class="logo-text">"LAZARUS"</span>
                <span class="logo-tech">"TECHNOLOGY"</span>
            </div>
            <div class="loading-screen__bar">
                <div
                    class="loading-screen__fill"
                    style=move || format!("width: {}%", stage.get().percent)
                ></div>
            </div>
            <p class="loading-screen__percent">{move || format!("{}%", stage.get().percent)}</p>
            <p class="loading-screen__message">{move || stage.get().message}</p>
            <div class="loading-screen__icons">
                {STATUS_ICONS.iter().map(|(name, label, class)| view! {
                    <div class="loading-screen__icon">
                        <span class=*class>{icon(name)}</span>
                        <span>{*label}</span>
                    </div>
                }).collect_view()}
            </div>
            <div class="loading-screen__dots">
                <span class="dot"></span>
                <span class="dot"></span>
                <span class="dot"></span>
            </div>
            <blockquote class="loading-screen__quote">
                "\"Transformando ideias em soluções digitais de alto impacto\""
            </blockquote>
        </div>
    }
}
