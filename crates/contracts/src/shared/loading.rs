//! Этапы экрана загрузки каталога.
//!
//! Проценты и паузы декоративные: реальная загрузка идёт одним запросом
//! всех документов между этапами `Fetching` и `Merging`.

/// Этап загрузки: процент для полосы прогресса и подпись
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingStage {
    pub percent: u8,
    pub message: &'static str,
    /// Пауза после показа этапа, мс
    pub pause_ms: u32,
}

pub const BOOT: LoadingStage = LoadingStage {
    percent: 10,
    message: "Inicializando sistema Lazarus...",
    pause_ms: 300,
};

pub const MODULES: LoadingStage = LoadingStage {
    percent: 25,
    message: "Carregando módulos de tecnologia...",
    pause_ms: 400,
};

pub const FETCHING: LoadingStage = LoadingStage {
    percent: 40,
    message: "Preparando soluções para barbearias...",
    pause_ms: 0,
};

pub const WAITING: LoadingStage = LoadingStage {
    percent: 60,
    message: "Configurando consultorias especializadas...",
    pause_ms: 0,
};

pub const MERGING: LoadingStage = LoadingStage {
    percent: 80,
    message: "Otimizando performance...",
    pause_ms: 0,
};

pub const FINISHING: LoadingStage = LoadingStage {
    percent: 95,
    message: "Quase pronto...",
    pause_ms: 300,
};

pub const DONE: LoadingStage = LoadingStage {
    percent: 100,
    message: "Quase pronto...",
    pause_ms: 200,
};

/// Все этапы по порядку
pub const STAGES: [LoadingStage; 7] = [BOOT, MODULES, FETCHING, WAITING, MERGING, FINISHING, DONE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_strictly_increase_to_100() {
        assert!(STAGES.windows(2).all(|w| w[0].percent < w[1].percent));
        assert_eq!(STAGES.last().map(|s| s.percent), Some(100));
    }
}
