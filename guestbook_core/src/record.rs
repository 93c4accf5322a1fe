use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minute precision, the way rows are written to the sheet.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The two append-only logs kept in the Guestbook Store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogName {
    Hugs,
    Messages,
}

impl LogName {
    /// Title of the sheet tab backing this log.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogName::Hugs => "Hugs",
            LogName::Messages => "Messages",
        }
    }
}

impl fmt::Display for LogName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stored row: (timestamp, value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub timestamp: String,
    pub value: String,
}

impl Record {
    pub fn new(timestamp: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            value: value.into(),
        }
    }

    /// Build a record from raw sheet cells. Short rows are padded with empty
    /// strings, extra cells are ignored.
    pub fn from_row(cells: &[String]) -> Self {
        let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();
        Self {
            timestamp: cell(0),
            value: cell(1),
        }
    }

    pub fn into_row(self) -> Vec<String> {
        vec![self.timestamp, self.value]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HugRecord {
    pub timestamp: String,
    pub name: String,
}

impl From<Record> for HugRecord {
    fn from(record: Record) -> Self {
        Self {
            timestamp: record.timestamp,
            name: record.value,
        }
    }
}

impl From<HugRecord> for Record {
    fn from(hug: HugRecord) -> Self {
        Record::new(hug.timestamp, hug.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub timestamp: String,
    pub text: String,
}

impl From<Record> for MessageRecord {
    fn from(record: Record) -> Self {
        Self {
            timestamp: record.timestamp,
            text: record.value,
        }
    }
}

impl From<MessageRecord> for Record {
    fn from(message: MessageRecord) -> Self {
        Record::new(message.timestamp, message.text)
    }
}

pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current wall-clock time in the store's civil offset.
pub fn timestamp_now(offset: FixedOffset) -> String {
    format_timestamp(&Utc::now().with_timezone(&offset))
}
