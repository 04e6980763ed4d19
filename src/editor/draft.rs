/// Поля ввода нового субтитра в том виде, в каком их ввел пользователь
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionDraft {
    /// Текст субтитра
    pub text: String,
    /// Время начала, `hh:mm:ss`
    pub start: String,
    /// Время окончания, `hh:mm:ss`
    pub end: String,
}

impl CaptionDraft {
    /// Создает черновик из трех полей
    pub fn new(text: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// Очищает все поля
    pub fn clear(&mut self) {
        self.text.clear();
        self.start.clear();
        self.end.clear();
    }

    /// Проверяет, пусты ли все поля
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.start.is_empty() && self.end.is_empty()
    }
}
