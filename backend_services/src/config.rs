use std::{path::PathBuf, sync::Arc, time::Duration};

use chrono::{FixedOffset, Offset, Utc};
use tracing::{error, info};

use crate::services::{
    store::{GuestbookStore, StoreError, UnconfiguredStore},
    GuestbookService, MediaLibrary, MemoryStore, SessionRegistry, SheetsSettings, SheetsStore,
};

/// KST, where the guestbook timestamps are read.
const DEFAULT_UTC_OFFSET_MINUTES: i32 = 9 * 60;
const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Sheets,
    Memory,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: String,
    pub static_dir: String,
    pub media_dir: String,
    pub store_backend: StoreBackend,
    pub spreadsheet_id: Option<String>,
    pub sheets_token: Option<String>,
    pub sheets_api_base: String,
    pub sheets_timeout_secs: u64,
    pub utc_offset: FixedOffset,
    pub session_idle_minutes: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let store_backend = match non_empty("GUESTBOOK_STORE").as_deref() {
            Some("memory") => StoreBackend::Memory,
            _ => StoreBackend::Sheets,
        };

        let utc_offset = non_empty("GUESTBOOK_UTC_OFFSET_MINUTES")
            .and_then(|v| v.trim().parse::<i32>().ok())
            .and_then(|minutes| minutes.checked_mul(60))
            .and_then(FixedOffset::east_opt)
            .or_else(|| FixedOffset::east_opt(DEFAULT_UTC_OFFSET_MINUTES * 60))
            .unwrap_or_else(|| Utc.fix());

        Self {
            bind_address: non_empty("BIND_ADDRESS").unwrap_or_else(|| "127.0.0.1:3000".to_string()),
            static_dir: non_empty("STATIC_DIR").unwrap_or_else(|| "dist".to_string()),
            media_dir: non_empty("MEDIA_DIR").unwrap_or_else(|| ".".to_string()),
            store_backend,
            spreadsheet_id: non_empty("SPREADSHEET_ID"),
            sheets_token: non_empty("GOOGLE_SHEETS_TOKEN"),
            sheets_api_base: non_empty("SHEETS_API_BASE")
                .unwrap_or_else(|| DEFAULT_SHEETS_API_BASE.to_string()),
            sheets_timeout_secs: non_empty("SHEETS_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(10),
            utc_offset,
            session_idle_minutes: non_empty("SESSION_IDLE_MINUTES")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(60),
        }
    }

    pub fn static_dir(&self) -> PathBuf {
        PathBuf::from(&self.static_dir)
    }

    pub fn media_dir(&self) -> PathBuf {
        PathBuf::from(&self.media_dir)
    }

    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_minutes.saturating_mul(60))
    }

    /// Sheets connection settings, or the ConfigurationError explaining what
    /// is missing.
    pub fn sheets_settings(&self) -> Result<SheetsSettings, StoreError> {
        let spreadsheet_id = self
            .spreadsheet_id
            .clone()
            .ok_or_else(|| StoreError::Configuration("SPREADSHEET_ID is not set".to_string()))?;
        let token = self.sheets_token.clone().ok_or_else(|| {
            StoreError::Configuration("GOOGLE_SHEETS_TOKEN is not set".to_string())
        })?;
        Ok(SheetsSettings {
            api_base: self.sheets_api_base.clone(),
            spreadsheet_id,
            token,
            timeout: Duration::from_secs(self.sheets_timeout_secs),
        })
    }

    /// Open the configured store. A setup failure does not stop the server:
    /// the page keeps rendering and reports the reason.
    pub fn build_store(&self) -> (Arc<dyn GuestbookStore>, Option<String>) {
        let opened = match self.store_backend {
            StoreBackend::Memory => {
                info!("Using in-memory guestbook store");
                return (Arc::new(MemoryStore::new()), None);
            }
            StoreBackend::Sheets => self.sheets_settings().and_then(SheetsStore::new),
        };

        match opened {
            Ok(store) => {
                info!("Using Google Sheets guestbook store");
                (Arc::new(store), None)
            }
            Err(e) => {
                let reason = match e {
                    StoreError::Configuration(reason) => reason,
                    other => other.to_string(),
                };
                error!("Google Sheets setup failed: {}", reason);
                (Arc::new(UnconfiguredStore::new(reason.clone())), Some(reason))
            }
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub guestbook: Arc<GuestbookService>,
    pub sessions: Arc<SessionRegistry>,
    pub media: Arc<MediaLibrary>,
    /// Reason the store failed to open at startup, shown on every page.
    pub setup_error: Option<String>,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let (store, setup_error) = config.build_store();
        Self::with_store(config, store, setup_error)
    }

    pub fn with_store(
        config: Config,
        store: Arc<dyn GuestbookStore>,
        setup_error: Option<String>,
    ) -> Self {
        let guestbook = Arc::new(GuestbookService::new(store, config.utc_offset));
        let sessions = Arc::new(SessionRegistry::new(config.session_idle()));
        let media = Arc::new(MediaLibrary::new(config.media_dir()));
        Self {
            config: Arc::new(config),
            guestbook,
            sessions,
            media,
            setup_error,
        }
    }
}
