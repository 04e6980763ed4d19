use crate::editor::{CaptionDraft, PlaybackClock};
use crate::error::Result;
use crate::logging::{log_debug, log_info, log_warning};
use crate::timeline::{CaptionInterval, CaptionListing, CaptionTimeline};
use crate::EditorOptions;
use log::LevelFilter;

/// Сессия редактирования субтитров для одного видео.
///
/// Владеет шкалой субтитров и черновиком ввода. Часы плеера передаются
/// при каждом запросе оверлея.
#[derive(Debug, Clone)]
pub struct CaptionEditor {
    options: EditorOptions,
    video_url: Option<String>,
    draft: CaptionDraft,
    timeline: CaptionTimeline,
}

impl CaptionEditor {
    /// Создает новую сессию с заданными настройками
    pub fn new(options: EditorOptions) -> Self {
        let level = options.level_filter();
        let effective_level = *level.as_ref().unwrap_or(&LevelFilter::Info);

        #[cfg(test)]
        {
            crate::logging::setup_test_logging(effective_level);
        }
        #[cfg(not(test))]
        {
            if !crate::logging::setup_logging(effective_level) {
                log_debug(&format!("Логгер уже настроен, уровень {} не применен", effective_level));
            }
        }

        if let Err(err) = level {
            log_warning(&format!("{}; используется уровень {}", err, effective_level));
        }

        log_info(&format!("Создана сессия редактирования субтитров с настройками: {:?}", options));

        Self {
            options,
            video_url: None,
            draft: CaptionDraft::default(),
            timeline: CaptionTimeline::new(),
        }
    }

    /// Возвращает настройки сессии
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Устанавливает адрес видео; пустая строка убирает видео
    pub fn set_video_url(&mut self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            log_debug("Видео убрано");
            self.video_url = None;
        } else {
            log_debug(&format!("Установлено видео: {}", url));
            self.video_url = Some(url.to_string());
        }
    }

    /// Адрес текущего видео
    pub fn video_url(&self) -> Option<&str> {
        self.video_url.as_deref()
    }

    pub fn draft(&self) -> &CaptionDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut CaptionDraft {
        &mut self.draft
    }

    pub fn set_text(&mut self, text: &str) {
        self.draft.text = text.to_string();
    }

    pub fn set_start(&mut self, start: &str) {
        self.draft.start = start.to_string();
    }

    pub fn set_end(&mut self, end: &str) {
        self.draft.end = end.to_string();
    }

    /// Добавляет субтитр из черновика.
    ///
    /// При успехе черновик очищается (если это включено в настройках).
    /// При ошибке черновик остается как есть, чтобы пользователь мог его исправить.
    pub fn submit(&mut self) -> Result<CaptionInterval> {
        let text = if self.options.trim_caption_text {
            self.draft.text.trim()
        } else {
            self.draft.text.as_str()
        };

        let caption = self.timeline.add(text, &self.draft.start, &self.draft.end)?;

        if self.options.clear_draft_on_submit {
            self.draft.clear();
        }

        Ok(caption)
    }

    /// Текст для оверлея поверх видео.
    ///
    /// Пустая строка, если видео не задано, плеер не отдает позицию
    /// или в этой позиции нет субтитра.
    pub fn overlay_text<C: PlaybackClock + ?Sized>(&self, clock: &C) -> &str {
        if self.video_url.is_none() {
            return "";
        }

        clock
            .position()
            .and_then(|position| self.timeline.active_at(position))
            .map_or("", |caption| caption.text())
    }

    /// Строки для отображения списка субтитров
    pub fn listing(&self) -> Vec<CaptionListing> {
        self.timeline.listing()
    }

    pub fn timeline(&self) -> &CaptionTimeline {
        &self.timeline
    }

    /// Завершает сессию и возвращает накопленную шкалу
    pub fn into_timeline(self) -> CaptionTimeline {
        self.timeline
    }
}

impl Default for CaptionEditor {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}
