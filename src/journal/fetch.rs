use serde::Serialize;
use serde_json::value::RawValue;
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::{EmotionPalette, normalize_json};
use crate::core::EmotionEntry;
use crate::error::{MoodError, MoodResult};

use super::{AuthenticatedUser, EmotionRecordStore, FetchEmotionsRequest, JournalKind, StoreError};

/// Successful lookups.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The journal has emotions and the caller owns them.
    Found {
        emotion_id: String,
        emotions: Box<RawValue>,
    },
    /// The journal has no emotions row. Not an error for callers.
    NoData,
}

impl FetchOutcome {
    /// Normalized layout input; `NoData` yields the placeholder entry.
    pub fn entries(&self, palette: &EmotionPalette) -> MoodResult<Vec<EmotionEntry>> {
        match self {
            Self::Found { emotions, .. } => normalize_json(emotions.get(), palette),
            Self::NoData => Ok(vec![EmotionEntry::no_data()]),
        }
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        200
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("method `{0}` not allowed")]
    MethodNotAllowed(String),

    #[error("user not authenticated")]
    NotAuthenticated,

    #[error("journal id and type are required")]
    BadRequest,

    #[error("emotions data doesn't belong to user")]
    Forbidden,

    #[error("error fetching emotions data: {0}")]
    Server(#[from] StoreError),
}

impl FetchError {
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MethodNotAllowed(_) => 405,
            Self::NotAuthenticated => 401,
            Self::BadRequest => 400,
            Self::Forbidden => 403,
            Self::Server(_) => 500,
        }
    }
}

/// Looks up the emotions of one journal on behalf of `user`.
///
/// Checks run in order: method, authentication, request fields, lookup,
/// ownership. A missing row is `FetchOutcome::NoData`, never an error.
pub fn fetch_journal_emotions<S: EmotionRecordStore + ?Sized>(
    store: &S,
    user: Option<&AuthenticatedUser>,
    request: &FetchEmotionsRequest,
) -> Result<FetchOutcome, FetchError> {
    if request.method != "POST" {
        return Err(FetchError::MethodNotAllowed(request.method.clone()));
    }
    let user = user.ok_or(FetchError::NotAuthenticated)?;

    let journal_id = request.journal_id.as_deref().filter(|id| !id.is_empty());
    let journal_type = request.journal_type.as_deref().filter(|kind| !kind.is_empty());
    let (Some(journal_id), Some(journal_type)) = (journal_id, journal_type) else {
        return Err(FetchError::BadRequest);
    };

    let kind = JournalKind::from_discriminator(journal_type);
    let row = store
        .fetch_single(kind.table_name(), journal_id)
        .inspect_err(|err| {
            warn!(
                journal_id,
                table = kind.table_name(),
                error = %err,
                "emotions lookup failed"
            );
        })?;

    let Some(row) = row else {
        debug!(journal_id, ?kind, "no emotions stored for journal");
        return Ok(FetchOutcome::NoData);
    };

    if row.owner_id != user.id {
        warn!(journal_id, "emotions row owned by another user");
        return Err(FetchError::Forbidden);
    }

    Ok(FetchOutcome::Found {
        emotion_id: row.emotion_id,
        emotions: row.emotions,
    })
}

/// JSON body for exposing the lookup over HTTP.
#[derive(Debug, Clone, Serialize)]
pub struct FetchResponse {
    #[serde(skip)]
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotions: Option<Option<Box<RawValue>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FetchResponse {
    #[must_use]
    pub fn from_result(result: &Result<FetchOutcome, FetchError>) -> Self {
        match result {
            Ok(FetchOutcome::Found {
                emotion_id,
                emotions,
            }) => Self {
                status: 200,
                message: "Emotions data fetched successfully".to_owned(),
                emotions: Some(Some(emotions.clone())),
                emotion_id: Some(emotion_id.clone()),
                details: None,
            },
            Ok(FetchOutcome::NoData) => Self {
                status: 200,
                message: "No emotions data found for this journal entry".to_owned(),
                emotions: Some(None),
                emotion_id: None,
                details: None,
            },
            Err(err) => Self {
                status: err.status_code(),
                message: match err {
                    FetchError::MethodNotAllowed(_) => "Method not allowed".to_owned(),
                    FetchError::NotAuthenticated => "User not authenticated".to_owned(),
                    FetchError::BadRequest => "Journal ID and type are required".to_owned(),
                    FetchError::Forbidden => {
                        "Unauthorized: Emotions data doesn't belong to user".to_owned()
                    }
                    FetchError::Server(_) => "Error fetching emotions data".to_owned(),
                },
                emotions: None,
                emotion_id: None,
                details: match err {
                    FetchError::Server(store_err) => Some(store_err.to_string()),
                    _ => None,
                },
            },
        }
    }

    pub fn to_json(&self) -> MoodResult<String> {
        serde_json::to_string(self)
            .map_err(|e| MoodError::InvalidData(format!("failed to serialize response: {e}")))
    }
}
