use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use guestbook_core::{LogName, Record};

use super::store::{validate_record, GuestbookStore, LogStatus, StoreError};

/// Process-local store. Used for local runs without a spreadsheet and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    logs: Mutex<HashMap<LogName, Vec<Record>>>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail with `StoreError::Unavailable` until switched back.
    #[cfg(test)]
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is offline".to_string()));
        }
        Ok(())
    }

    fn logs(&self) -> std::sync::MutexGuard<'_, HashMap<LogName, Vec<Record>>> {
        self.logs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl GuestbookStore for MemoryStore {
    async fn ensure_log(&self, log: LogName) -> Result<LogStatus, StoreError> {
        self.check_online()?;
        let mut logs = self.logs();
        if logs.contains_key(&log) {
            return Ok(LogStatus::Existing);
        }
        logs.insert(log, Vec::new());
        Ok(LogStatus::Created)
    }

    async fn append(&self, log: LogName, record: Record) -> Result<(), StoreError> {
        validate_record(&record)?;
        self.ensure_log(log).await?;
        self.logs().entry(log).or_default().push(record);
        Ok(())
    }

    async fn read_all(&self, log: LogName) -> Result<Vec<Record>, StoreError> {
        self.check_online()?;
        Ok(self.logs().get(&log).cloned().unwrap_or_default())
    }
}
