use async_trait::async_trait;
use guestbook_core::{LogName, Record};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing service could not be reached or rejected the call.
    #[error("guestbook store unavailable: {0}")]
    Unavailable(String),
    /// The store handle could not be set up at startup.
    #[error("guestbook store is not configured: {0}")]
    Configuration(String),
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStatus {
    Existing,
    Created,
}

/// Append-only logs of guestbook records.
#[async_trait]
pub trait GuestbookStore: Send + Sync {
    /// Create the log empty if it is missing. Safe to call any number of times.
    async fn ensure_log(&self, log: LogName) -> Result<LogStatus, StoreError>;

    /// Append `record` as the last row of `log`, creating the log first if needed.
    async fn append(&self, log: LogName, record: Record) -> Result<(), StoreError>;

    /// Every record of `log`, oldest first. Empty when the log does not exist.
    async fn read_all(&self, log: LogName) -> Result<Vec<Record>, StoreError>;
}

pub fn validate_record(record: &Record) -> Result<(), StoreError> {
    if record.value.trim().is_empty() {
        return Err(StoreError::InvalidRecord("record value is empty".to_string()));
    }
    Ok(())
}

/// Stands in for a store whose setup failed. Every call reports the reason.
#[derive(Debug, Clone)]
pub struct UnconfiguredStore {
    reason: String,
}

impl UnconfiguredStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }

    fn fail<T>(&self) -> Result<T, StoreError> {
        Err(StoreError::Configuration(self.reason.clone()))
    }
}

#[async_trait]
impl GuestbookStore for UnconfiguredStore {
    async fn ensure_log(&self, _log: LogName) -> Result<LogStatus, StoreError> {
        self.fail()
    }

    async fn append(&self, _log: LogName, _record: Record) -> Result<(), StoreError> {
        self.fail()
    }

    async fn read_all(&self, _log: LogName) -> Result<Vec<Record>, StoreError> {
        self.fail()
    }
}
