use crate::error::{Error, ErrorType, Result};
use crate::logging::{log_debug, log_trace, log_warning};
use crate::timecode::TimeCodec;
use crate::timeline::CaptionListing;
use serde::Serialize;

/// 2^64: все позиции от этого значения и выше лежат за пределами любого интервала
const POSITION_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Субтитр, привязанный к закрытому интервалу `[start_time, end_time]` в секундах
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptionInterval {
    text: String,
    start_time: u64,
    end_time: u64,
}

impl CaptionInterval {
    /// Создает новый субтитр.
    ///
    /// Текст не может быть пустым, а конец не может быть раньше начала.
    pub fn new(text: impl Into<String>, start_time: u64, end_time: u64) -> Result<Self> {
        let text = text.into();

        if text.trim().is_empty() {
            return Err(Error::new(ErrorType::InvalidInput, "Caption text is empty"));
        }

        if end_time < start_time {
            return Err(Error::InvalidInput(format!(
                "End time {} is before start time {}",
                TimeCodec::format(end_time),
                TimeCodec::format(start_time)
            )));
        }

        Ok(Self {
            text,
            start_time,
            end_time,
        })
    }

    /// Текст субтитра
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Время начала в секундах
    pub fn start_time(&self) -> u64 {
        self.start_time
    }

    /// Время окончания в секундах
    pub fn end_time(&self) -> u64 {
        self.end_time
    }

    /// Возвращает длительность субтитра в секундах
    pub fn duration(&self) -> u64 {
        self.end_time - self.start_time
    }

    /// Проверяет, попадает ли позиция воспроизведения в интервал (включая обе границы)
    pub fn contains(&self, position: f64) -> bool {
        if !(0.0..POSITION_LIMIT).contains(&position) {
            return false;
        }

        // Границы целые: достаточно целой части позиции, u64 в f64 не приводим
        let whole = position.floor();
        let seconds = whole as u64;

        seconds >= self.start_time
            && (seconds < self.end_time || (seconds == self.end_time && position == whole))
    }

    /// Время начала в формате `hh:mm:ss`
    pub fn formatted_start(&self) -> String {
        TimeCodec::format(self.start_time)
    }

    /// Время окончания в формате `hh:mm:ss`
    pub fn formatted_end(&self) -> String {
        TimeCodec::format(self.end_time)
    }
}

/// Упорядоченная по порядку добавления коллекция субтитров.
///
/// Пересекающиеся и повторяющиеся интервалы допускаются; при поиске
/// побеждает субтитр, добавленный раньше.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CaptionTimeline {
    captions: Vec<CaptionInterval>,
}

impl CaptionTimeline {
    /// Создает новую пустую шкалу субтитров
    pub fn new() -> Self {
        Self {
            captions: Vec::new(),
        }
    }

    /// Проверяет введенные данные и добавляет субтитр в конец шкалы.
    ///
    /// Проверка и изменение атомарны: при ошибке шкала не меняется.
    /// Возвращает созданный субтитр с уже разобранными временами.
    pub fn add(&mut self, text: &str, start_text: &str, end_text: &str) -> Result<CaptionInterval> {
        match Self::build_interval(text, start_text, end_text) {
            Ok(interval) => {
                log_debug(&format!(
                    "Добавлен субтитр #{} ({} - {}): {}",
                    self.captions.len() + 1,
                    interval.formatted_start(),
                    interval.formatted_end(),
                    interval.text
                ));
                self.captions.push(interval.clone());
                Ok(interval)
            }
            Err(err) => {
                log_warning(&format!("Субтитр отклонен: {}", err));
                Err(err)
            }
        }
    }

    fn build_interval(text: &str, start_text: &str, end_text: &str) -> Result<CaptionInterval> {
        if text.trim().is_empty() {
            return Err(Error::new(ErrorType::InvalidInput, "Caption text is empty"));
        }

        if start_text.trim().is_empty() {
            return Err(Error::new(ErrorType::InvalidInput, "Start time is empty"));
        }

        if end_text.trim().is_empty() {
            return Err(Error::new(ErrorType::InvalidInput, "End time is empty"));
        }

        let start_time = TimeCodec::parse(start_text)?;
        let end_time = TimeCodec::parse(end_text)?;

        CaptionInterval::new(text, start_time, end_time)
    }

    /// Возвращает субтитр, активный в указанной позиции воспроизведения.
    ///
    /// Первый подходящий в порядке добавления; `None` для пустой шкалы,
    /// отрицательной позиции или позиции вне всех интервалов.
    pub fn active_at(&self, position: f64) -> Option<&CaptionInterval> {
        let active = self.captions.iter().find(|caption| caption.contains(position));

        if let Some(caption) = active.filter(|_| log::log_enabled!(log::Level::Trace)) {
            log_trace(&format!("Позиция {:.3}: активен субтитр '{}'", position, caption.text));
        }

        active
    }

    /// Возвращает все субтитры в порядке добавления
    pub fn captions(&self) -> &[CaptionInterval] {
        &self.captions
    }

    /// Возвращает строки для отображения списка субтитров
    pub fn listing(&self) -> Vec<CaptionListing> {
        self.captions.iter().map(CaptionListing::from).collect()
    }

    /// Возвращает количество субтитров
    pub fn len(&self) -> usize {
        self.captions.len()
    }

    /// Проверяет, пуста ли шкала
    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }

    /// Возвращает итератор по субтитрам
    pub fn iter(&self) -> impl Iterator<Item = &CaptionInterval> {
        self.captions.iter()
    }

    /// Возвращает общую длительность от самого раннего начала до самого позднего конца
    pub fn total_duration(&self) -> u64 {
        let min_start = self.captions.iter().map(|c| c.start_time).min();
        let max_end = self.captions.iter().map(|c| c.end_time).max();

        match (min_start, max_end) {
            (Some(start), Some(end)) => end.saturating_sub(start),
            _ => 0,
        }
    }
}

impl std::ops::Index<usize> for CaptionTimeline {
    type Output = CaptionInterval;

    fn index(&self, index: usize) -> &Self::Output {
        &self.captions[index]
    }
}

impl<'a> IntoIterator for &'a CaptionTimeline {
    type Item = &'a CaptionInterval;
    type IntoIter = std::slice::Iter<'a, CaptionInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.captions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_rejects_empty_text() {
        let result = CaptionInterval::new("   ", 0, 1);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_interval_rejects_end_before_start() {
        let result = CaptionInterval::new("hi", 5, 2);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_interval_allows_zero_length() {
        let interval = CaptionInterval::new("flash", 7, 7).unwrap();
        assert_eq!(interval.duration(), 0);
        assert!(interval.contains(7.0));
        assert!(!interval.contains(7.001));
    }

    #[test]
    fn test_add_returns_parsed_interval() {
        let mut timeline = CaptionTimeline::new();
        let interval = timeline.add("Hello", "00:00:10", "00:00:20").unwrap();

        assert_eq!(interval.text(), "Hello");
        assert_eq!(interval.start_time(), 10);
        assert_eq!(interval.end_time(), 20);
        assert_eq!(interval.formatted_start(), "00:00:10");
        assert_eq!(interval.formatted_end(), "00:00:20");
        assert_eq!(timeline[0], interval);
    }

    #[test]
    fn test_add_rejects_empty_time_fields() {
        let mut timeline = CaptionTimeline::new();

        assert!(matches!(timeline.add("hi", "", "00:00:02"), Err(Error::InvalidInput(_))));
        assert!(matches!(timeline.add("hi", "00:00:01", " "), Err(Error::InvalidInput(_))));
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_add_propagates_invalid_format() {
        let mut timeline = CaptionTimeline::new();

        assert!(matches!(timeline.add("hi", "00:0x:01", "00:00:02"), Err(Error::InvalidFormat(_))));
        assert!(matches!(timeline.add("hi", "00:00:01", "2"), Err(Error::InvalidFormat(_))));
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_active_at_boundaries() {
        let mut timeline = CaptionTimeline::new();
        timeline.add("ten to twenty", "00:00:10", "00:00:20").unwrap();

        assert_eq!(timeline.active_at(10.0).map(|c| c.text()), Some("ten to twenty"));
        assert_eq!(timeline.active_at(20.0).map(|c| c.text()), Some("ten to twenty"));
        assert!(timeline.active_at(9.999).is_none());
        assert!(timeline.active_at(20.001).is_none());
        assert!(timeline.active_at(f64::NAN).is_none());
    }

    #[test]
    fn test_contains_beyond_f64_integer_precision() {
        let mut timeline = CaptionTimeline::new();
        // 9007199254740993 = 2^53 + 1, не представимо в f64
        let far = timeline
            .add("far", "2501999792983:36:33", "2501999792983:36:40")
            .unwrap();
        assert_eq!(far.start_time(), 9_007_199_254_740_993);

        assert!(timeline.active_at(9_007_199_254_740_992.0).is_none());
        assert_eq!(timeline.active_at(9_007_199_254_740_994.0).map(|c| c.text()), Some("far"));
        assert_eq!(timeline.active_at(9_007_199_254_741_000.0).map(|c| c.text()), Some("far"));
        assert!(timeline.active_at(9_007_199_254_741_002.0).is_none());
        assert!(timeline.active_at(f64::INFINITY).is_none());
    }

    #[test]
    fn test_total_duration() {
        let mut timeline = CaptionTimeline::new();
        assert_eq!(timeline.total_duration(), 0);

        timeline.add("late", "00:01:00", "00:01:30").unwrap();
        timeline.add("early", "00:00:05", "00:00:10").unwrap();
        assert_eq!(timeline.total_duration(), 85);
    }
}
