use crate::timeline::CaptionInterval;
use serde::Serialize;
use std::fmt;

/// Строка списка субтитров с уже отформатированными временами
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptionListing {
    pub text: String,
    pub start: String,
    pub end: String,
}

impl From<&CaptionInterval> for CaptionListing {
    fn from(caption: &CaptionInterval) -> Self {
        Self {
            text: caption.text().to_string(),
            start: caption.formatted_start(),
            end: caption.formatted_end(),
        }
    }
}

impl fmt::Display for CaptionListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} - {})", self.text, self.start, self.end)
    }
}
