//! JSON payloads exchanged between the page and the backend.

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;
use crate::notice::Notice;
use crate::record::{HugRecord, MessageRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleInfo {
    pub code: String,
    pub label: String,
}

impl From<Locale> for LocaleInfo {
    fn from(locale: Locale) -> Self {
        Self {
            code: locale.code().to_string(),
            label: locale.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HugRequest {
    pub session_id: String,
    #[serde(default)]
    pub locale: Locale,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    pub session_id: String,
    #[serde(default)]
    pub locale: Locale,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GifRequest {
    pub session_id: String,
}

/// A file under the media route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub url: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifFrame {
    pub index: usize,
    pub total: usize,
    pub item: MediaItem,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestbookBoard {
    pub total_hugs: usize,
    pub recent_hugs: Vec<HugRecord>,
    pub recent_messages: Vec<MessageRecord>,
    /// Set when a log could not be read and the lists may be incomplete.
    pub degraded: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub notices: Vec<Notice>,
    pub board: GuestbookBoard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageView {
    pub session_id: String,
    pub locale: Locale,
    pub notices: Vec<Notice>,
    pub music: Option<MediaItem>,
    pub image: Option<MediaItem>,
    pub gif: Option<GifFrame>,
    pub board: GuestbookBoard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hug_request_locale_defaults_to_english() {
        let request: HugRequest =
            serde_json::from_str(r#"{"session_id":"abc","name":"Jimin"}"#).unwrap();
        assert_eq!(request.locale, Locale::En);
    }

    #[test]
    fn test_board_wire_shape() {
        let board = GuestbookBoard {
            total_hugs: 1,
            recent_hugs: vec![HugRecord { timestamp: "t".into(), name: "V".into() }],
            ..Default::default()
        };
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["total_hugs"], 1);
        assert_eq!(json["recent_hugs"][0]["name"], "V");
        assert_eq!(json["degraded"], false);
    }
}
