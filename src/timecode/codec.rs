use crate::error::{Error, ErrorType, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Три неотрицательных числовых компонента, разделенных двоеточием
static TIMECODE_REGEX: Lazy<std::result::Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^([0-9]+):([0-9]+):([0-9]+)$"));

/// Преобразование между строкой `hh:mm:ss` и количеством секунд
pub struct TimeCodec;

impl TimeCodec {
    /// Парсит строку вида `hh:mm:ss` и возвращает время в секундах.
    ///
    /// Минуты и секунды не ограничены сверху: `00:90:00` дает 5400.
    /// Пробелы вокруг строки игнорируются.
    pub fn parse(text: &str) -> Result<u64> {
        let regex = Self::timecode_regex()?;

        let captures = regex
            .captures(text.trim())
            .ok_or_else(|| Error::InvalidFormat(format!("Expected hh:mm:ss, got '{}'", text)))?;

        let hours = Self::parse_component(&captures[1], "hours")?;
        let minutes = Self::parse_component(&captures[2], "minutes")?;
        let seconds = Self::parse_component(&captures[3], "seconds")?;

        hours
            .checked_mul(3600)
            .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
            .and_then(|hm| hm.checked_add(seconds))
            .ok_or_else(|| Error::InvalidFormat(format!("Time value out of range: '{}'", text)))
    }

    /// Форматирует количество секунд как `hh:mm:ss`.
    ///
    /// Каждый компонент занимает минимум две цифры; часы не обрезаются,
    /// поэтому 100 часов и больше выводятся тремя и более цифрами.
    pub fn format(seconds: u64) -> String {
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }

    fn timecode_regex() -> Result<&'static Regex> {
        (*TIMECODE_REGEX)
            .as_ref()
            .map_err(|e| Error::Config(format!("Failed to compile timecode regex: {}", e)))
    }

    fn parse_component(value: &str, name: &str) -> Result<u64> {
        value
            .parse()
            .map_err(|_| Error::new(ErrorType::InvalidFormat, &format!("Invalid {}: {}", name, value)))
    }
}
