use std::time::Duration;

use async_trait::async_trait;
use guestbook_core::{LogName, Record};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use super::store::{validate_record, GuestbookStore, LogStatus, StoreError};

#[derive(Debug, Clone)]
pub struct SheetsSettings {
    pub api_base: String,
    pub spreadsheet_id: String,
    /// OAuth bearer token for the Sheets API.
    pub token: String,
    pub timeout: Duration,
}

/// Guestbook Store backed by a Google spreadsheet, one tab per log.
pub struct SheetsStore {
    client: Client,
    settings: SheetsSettings,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

fn unavailable(action: &str, err: reqwest::Error) -> StoreError {
    StoreError::Unavailable(format!("{}: {}", action, err))
}

async fn check_status(response: Response, action: &str) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Unavailable(format!(
        "{} failed with {}: {}",
        action, status, body
    )))
}

impl SheetsStore {
    pub fn new(settings: SheetsSettings) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| StoreError::Configuration(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client, settings })
    }

    fn spreadsheet_url(&self) -> String {
        format!(
            "{}/v4/spreadsheets/{}",
            self.settings.api_base.trim_end_matches('/'),
            self.settings.spreadsheet_id
        )
    }

    fn range_url(&self, log: LogName) -> String {
        format!("{}/values/{}!A:B", self.spreadsheet_url(), log.as_str())
    }

    async fn sheet_titles(&self) -> Result<Vec<String>, StoreError> {
        let response = self
            .client
            .get(self.spreadsheet_url())
            .query(&[("fields", "sheets.properties.title")])
            .bearer_auth(&self.settings.token)
            .send()
            .await
            .map_err(|e| unavailable("open spreadsheet", e))?;
        let meta: SpreadsheetMeta = check_status(response, "open spreadsheet")
            .await?
            .json()
            .await
            .map_err(|e| unavailable("decode spreadsheet", e))?;
        Ok(meta.sheets.into_iter().map(|s| s.properties.title).collect())
    }

    async fn log_exists(&self, log: LogName) -> Result<bool, StoreError> {
        Ok(self.sheet_titles().await?.iter().any(|t| t == log.as_str()))
    }

    async fn add_sheet(&self, log: LogName) -> Result<(), StoreError> {
        let body = json!({
            "requests": [{ "addSheet": { "properties": { "title": log.as_str() } } }]
        });
        let response = self
            .client
            .post(format!("{}:batchUpdate", self.spreadsheet_url()))
            .bearer_auth(&self.settings.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| unavailable("create log", e))?;
        check_status(response, "create log").await?;
        Ok(())
    }
}

#[async_trait]
impl GuestbookStore for SheetsStore {
    async fn ensure_log(&self, log: LogName) -> Result<LogStatus, StoreError> {
        if self.log_exists(log).await? {
            return Ok(LogStatus::Existing);
        }
        match self.add_sheet(log).await {
            Ok(()) => {
                info!("Created guestbook log '{}'", log);
                Ok(LogStatus::Created)
            }
            // Another writer may have created it in between.
            Err(e) => {
                if self.log_exists(log).await? {
                    Ok(LogStatus::Existing)
                } else {
                    Err(e)
                }
            }
        }
    }

    async fn append(&self, log: LogName, record: Record) -> Result<(), StoreError> {
        validate_record(&record)?;
        self.ensure_log(log).await?;

        let body = json!({ "values": [record.into_row()] });
        let response = self
            .client
            .post(format!("{}:append", self.range_url(log)))
            .query(&[
                ("valueInputOption", "RAW"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .bearer_auth(&self.settings.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| unavailable("append row", e))?;
        check_status(response, "append row").await?;
        debug!("Appended row to '{}'", log);
        Ok(())
    }

    async fn read_all(&self, log: LogName) -> Result<Vec<Record>, StoreError> {
        let response = self
            .client
            .get(self.range_url(log))
            .bearer_auth(&self.settings.token)
            .send()
            .await
            .map_err(|e| unavailable("read rows", e))?;

        // A range on a missing tab is rejected with 400.
        if response.status() == StatusCode::BAD_REQUEST && !self.log_exists(log).await? {
            return Ok(Vec::new());
        }

        let range: ValueRange = check_status(response, "read rows")
            .await?
            .json()
            .await
            .map_err(|e| unavailable("decode rows", e))?;
        Ok(range.values.iter().map(|row| Record::from_row(row)).collect())
    }
}
