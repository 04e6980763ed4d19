pub mod error;
pub mod timecode;
pub mod timeline;
pub mod editor;
pub mod logging;

pub use error::{Error, Result, ErrorType};
pub use logging::{
    setup_logging, setup_test_logging, log_error, log_warning, log_info, log_debug, log_trace
};
pub use timecode::TimeCodec;
pub use timeline::{CaptionInterval, CaptionListing, CaptionTimeline};
pub use editor::{CaptionDraft, CaptionEditor, PlaybackClock};

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Настройки сессии редактирования субтитров
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Очищать ли поля ввода после успешного добавления субтитра
    pub clear_draft_on_submit: bool,

    /// Обрезать ли пробелы по краям текста субтитра
    pub trim_caption_text: bool,

    /// Уровень логирования (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    ///
    /// Глобальный логгер устанавливается один раз на процесс: уровень
    /// применяется только первой созданной сессией, у последующих он игнорируется.
    pub log_level: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            clear_draft_on_submit: true,
            trim_caption_text: true,
            log_level: "info".to_string(),
        }
    }
}

impl EditorOptions {
    /// Загружает настройки из JSON строки; отсутствующие поля берутся по умолчанию
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.level_filter()?;
        Ok(options)
    }

    /// Загружает настройки из JSON файла
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                return log_error(err, &format!("Не удалось прочитать настройки '{}'", path.display()))
            }
        };
        Self::from_json_str(&content)
    }

    /// Возвращает уровень логирования
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| Error::new(ErrorType::Config, &format!("Unknown log level: '{}'", self.log_level)))
    }
}
