//! Guestbook domain for the Welcome Back page.
//!
//! Everything in here is pure and wasm-safe: the backend uses it to decide
//! what gets written to the Guestbook Store, the frontend uses it for the
//! localized labels and the payload types it exchanges with the backend.

pub mod api;
pub mod flow;
pub mod gif;
pub mod i18n;
pub mod notice;
pub mod recent;
pub mod record;
pub mod session;

pub use api::{
    GifFrame, GifRequest, GuestbookBoard, HugRequest, LocaleInfo, MediaItem, MessageRequest,
    PageView, SessionInfo, SubmissionResponse,
};
pub use flow::{decide_hug, decide_message, HugDecision, MessageDecision};
pub use gif::{sequence_number, sort_by_sequence, GifCursor};
pub use i18n::{Locale, UiStrings};
pub use notice::{Notice, NoticeLevel};
pub use recent::{build_board, recent, RECENT_HUGS, RECENT_MESSAGES};
pub use record::{format_timestamp, timestamp_now, HugRecord, LogName, MessageRecord, Record};
pub use session::{SessionContext, SessionDedupSet};
