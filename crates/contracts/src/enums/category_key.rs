use serde::{Deserialize, Serialize};

/// Категории каталога, у каждой свой статический документ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Barbearia,
    Tecnologia,
    Consultoria,
}

impl CategoryKey {
    /// Получить код категории
    pub fn code(&self) -> &'static str {
        match self {
            CategoryKey::Barbearia => "barbearia",
            CategoryKey::Tecnologia => "tecnologia",
            CategoryKey::Consultoria => "consultoria",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryKey::Barbearia => "Barbearias",
            CategoryKey::Tecnologia => "Tecnologia",
            CategoryKey::Consultoria => "Consultoria",
        }
    }

    /// Относительный путь JSON-документа категории
    pub fn document_path(&self) -> &'static str {
        match self {
            CategoryKey::Barbearia => "/db/produtos-barbearia.json",
            CategoryKey::Tecnologia => "/db/produtos-tecnologia.json",
            CategoryKey::Consultoria => "/db/produtos-consultoria.json",
        }
    }

    /// Имя файла документа внутри каталога данных
    pub fn document_file_name(&self) -> &'static str {
        self.document_path().trim_start_matches("/db/")
    }

    /// Все категории в порядке загрузки
    pub fn all() -> Vec<CategoryKey> {
        vec![
            CategoryKey::Barbearia,
            CategoryKey::Tecnologia,
            CategoryKey::Consultoria,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "barbearia" => Some(CategoryKey::Barbearia),
            "tecnologia" => Some(CategoryKey::Tecnologia),
            "consultoria" => Some(CategoryKey::Consultoria),
            _ => None,
        }
    }
}

impl std::fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
