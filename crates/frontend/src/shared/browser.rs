//! Побочные эффекты в браузере: внешние ссылки, прокрутка, история.

use web_sys::{ScrollBehavior, ScrollToOptions};

/// Высота закреплённой навигации, на неё сдвигается прокрутка к секции
pub const NAV_OFFSET_PX: f64 = 80.0;

/// Открывает ссылку в новой вкладке. Пустая ссылка игнорируется.
pub fn open_external(url: &str) {
    if url.trim().is_empty() {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) =
        window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
    {
        log::error!("Failed to open {}: {:?}", url, e);
    }
}

/// Позиция прокрутки для секции с учётом закреплённой навигации
pub fn section_scroll_top(element_top: f64, scroll_y: f64) -> f64 {
    (element_top + scroll_y - NAV_OFFSET_PX).max(0.0)
}

fn smooth_scroll(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Плавная прокрутка к элементу с данным id; нет элемента, нет прокрутки
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        log::warn!("Section #{} not found", id);
        return;
    };
    let top = element.get_bounding_client_rect().top();
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    smooth_scroll(section_scroll_top(top, scroll_y));
}

pub fn scroll_to_top() {
    smooth_scroll(0.0);
}

/// Шаг назад по истории браузера
pub fn history_back() {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.back() {
                log::error!("history.back failed: {:?}", e);
            }
        }
        Err(e) => log::error!("History API unavailable: {:?}", e),
    }
}

/// Текущий год по часам браузера, для подвала
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_scroll_top() {
        assert_eq!(section_scroll_top(500.0, 0.0), 420.0);
        assert_eq!(section_scroll_top(200.0, 1000.0), 1120.0);
    }

    #[test]
    fn test_section_scroll_top_never_negative() {
        assert_eq!(section_scroll_top(20.0, 0.0), 0.0);
    }
}
