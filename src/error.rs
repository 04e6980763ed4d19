use thiserror::Error;

/// Типы ошибок, которые могут возникнуть при работе с субтитрами
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Строка времени не раскладывается на три числовых компонента
    InvalidFormat,
    /// Пустой текст или поле времени, либо конец раньше начала
    InvalidInput,
    /// Ошибка конфигурации
    Config,
}

/// Ошибки, которые могут возникнуть при работе с субтитрами
#[derive(Debug, Error)]
pub enum Error {
    #[error("Неверный формат времени: {0}")]
    InvalidFormat(String),

    #[error("Неверные входные данные: {0}")]
    InvalidInput(String),

    #[error("Ошибка конфигурации: {0}")]
    Config(String),

    #[error("Ошибка сериализации JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Ошибка логирования: {0}")]
    LoggedError(String),
}

impl Error {
    /// Создает новую ошибку указанного типа с сообщением
    pub fn new(error_type: ErrorType, message: &str) -> Self {
        match error_type {
            ErrorType::InvalidFormat => Self::InvalidFormat(message.to_string()),
            ErrorType::InvalidInput => Self::InvalidInput(message.to_string()),
            ErrorType::Config => Self::Config(message.to_string()),
        }
    }
}

/// Результат с обработкой ошибок
pub type Result<T> = std::result::Result<T, Error>;
