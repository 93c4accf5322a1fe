pub mod guestbook_service;
pub mod media_service;
pub mod memory_store;
pub mod session_service;
pub mod sheets_store;
pub mod store;

pub use guestbook_service::GuestbookService;
pub use media_service::MediaLibrary;
pub use memory_store::MemoryStore;
pub use session_service::{parse_session_id, SessionRegistry};
pub use sheets_store::{SheetsSettings, SheetsStore};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidInput(String),
}
