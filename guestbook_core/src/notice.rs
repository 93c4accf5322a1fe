use serde::{Deserialize, Serialize};

use crate::flow::{HugDecision, MessageDecision};
use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// A non-blocking banner shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, text: text.into() }
    }

    /// Notice for a hug decision, assuming an accepted hug was stored.
    pub fn for_hug(decision: &HugDecision, locale: Locale) -> Option<Self> {
        let strings = locale.strings();
        match decision {
            HugDecision::Ignored => None,
            HugDecision::Duplicate => Some(Self::warning(strings.duplicate)),
            HugDecision::Accepted { name } => {
                Some(Self::success(format!("{}{}", strings.hug_sent, name)))
            }
        }
    }

    pub fn for_message(decision: &MessageDecision, locale: Locale) -> Option<Self> {
        match decision {
            MessageDecision::Ignored => None,
            MessageDecision::Accepted { .. } => Some(Self::success(locale.strings().msg_sent)),
        }
    }

    pub fn store_unavailable(locale: Locale) -> Self {
        Self::warning(locale.strings().store_unavailable)
    }

    /// The logs could not be read. Says nothing about a submission.
    pub fn board_unavailable(locale: Locale) -> Self {
        Self::warning(locale.strings().board_unavailable)
    }

    pub fn setup_failed(locale: Locale, reason: &str) -> Self {
        Self::error(format!("{}{}", locale.strings().setup_failed, reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hug_notice_names_the_sender() {
        let decision = HugDecision::Accepted { name: "Yoongi".to_string() };
        let notice = Notice::for_hug(&decision, Locale::En).unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.text, "💜 Hug sent! Thank you Yoongi");
    }

    #[test]
    fn test_duplicate_is_a_warning() {
        let notice = Notice::for_hug(&HugDecision::Duplicate, Locale::Ko).unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.text, Locale::Ko.strings().duplicate);
    }

    #[test]
    fn test_ignored_input_has_no_notice() {
        assert!(Notice::for_hug(&HugDecision::Ignored, Locale::En).is_none());
        assert!(Notice::for_message(&MessageDecision::Ignored, Locale::En).is_none());
    }

    #[test]
    fn test_setup_failed_carries_reason() {
        let notice = Notice::setup_failed(Locale::En, "SPREADSHEET_ID is not set");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.text.ends_with("SPREADSHEET_ID is not set"));
    }
}
