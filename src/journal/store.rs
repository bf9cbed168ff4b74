use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use thiserror::Error;

use crate::error::{MoodError, MoodResult};

/// Stored emotions row for one journal entry.
///
/// `emotions` is kept as raw JSON so label order survives until normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionRow {
    pub emotion_id: String,
    pub journal_id: String,
    #[serde(rename = "user_UID")]
    pub owner_id: String,
    pub emotions: Box<RawValue>,
}

impl EmotionRow {
    pub fn new(
        emotion_id: impl Into<String>,
        journal_id: impl Into<String>,
        owner_id: impl Into<String>,
        emotions_json: &str,
    ) -> MoodResult<Self> {
        let emotions = RawValue::from_string(emotions_json.to_owned())
            .map_err(|e| MoodError::InvalidData(format!("invalid emotions json: {e}")))?;
        Ok(Self {
            emotion_id: emotion_id.into(),
            journal_id: journal_id.into(),
            owner_id: owner_id.into(),
            emotions,
        })
    }

    #[must_use]
    pub fn emotions_json(&self) -> &str {
        self.emotions.get()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    #[error("unknown table `{0}`")]
    UnknownTable(String),

    #[error("query failed: {0}")]
    Query(String),
}

/// Single-row lookup against a per-journal-kind table.
pub trait EmotionRecordStore {
    /// Returns the row for `journal_id`, or `None` when the table has none.
    fn fetch_single(
        &self,
        table: &str,
        journal_id: &str,
    ) -> Result<Option<EmotionRow>, StoreError>;
}

/// Map-backed store for hosts without a database and for tests.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    tables: HashMap<String, HashMap<String, EmotionRow>>,
    outage: Option<String>,
}

impl InMemoryRecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the row for `row.journal_id` in `table`.
    pub fn insert(&mut self, table: &str, row: EmotionRow) {
        self.tables
            .entry(table.to_owned())
            .or_default()
            .insert(row.journal_id.clone(), row);
    }

    #[must_use]
    pub fn with_row(mut self, table: &str, row: EmotionRow) -> Self {
        self.insert(table, row);
        self
    }

    /// Makes every lookup fail until `clear_outage` is called.
    pub fn set_outage(&mut self, message: impl Into<String>) {
        self.outage = Some(message.into());
    }

    pub fn clear_outage(&mut self) {
        self.outage = None;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EmotionRecordStore for InMemoryRecordStore {
    fn fetch_single(
        &self,
        table: &str,
        journal_id: &str,
    ) -> Result<Option<EmotionRow>, StoreError> {
        if let Some(message) = &self.outage {
            return Err(StoreError::Unavailable(message.clone()));
        }
        Ok(self
            .tables
            .get(table)
            .and_then(|rows| rows.get(journal_id))
            .cloned())
    }
}
