use contracts::shared::outbound::OutboundAction;

use crate::shared::browser::open_external;

/// Выполняет внешнее действие: открывает его ссылку в новой вкладке.
/// Действие без ссылки ничего не делает.
pub fn dispatch(action: &OutboundAction) {
    match action.url() {
        Some(url) => open_external(&url),
        None => log::warn!("Outbound action without URL: {:?}", action),
    }
}
