use serde::{Deserialize, Serialize};

/// Journal flavor; each one keeps its emotions in a separate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalKind {
    Freeform,
    Guided,
}

impl JournalKind {
    /// Any discriminator other than `"freeform"` selects guided journals.
    #[must_use]
    pub fn from_discriminator(journal_type: &str) -> Self {
        if journal_type == "freeform" {
            Self::Freeform
        } else {
            Self::Guided
        }
    }

    #[must_use]
    pub fn table_name(self) -> &'static str {
        match self {
            Self::Freeform => "freeform_journal_emotions_table",
            Self::Guided => "guided_journal_emotions_table",
        }
    }
}

/// Incoming request for one journal's emotions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchEmotionsRequest {
    pub method: String,
    #[serde(default)]
    pub journal_id: Option<String>,
    #[serde(default)]
    pub journal_type: Option<String>,
}

impl FetchEmotionsRequest {
    #[must_use]
    pub fn post(journal_id: impl Into<String>, journal_type: impl Into<String>) -> Self {
        Self {
            method: "POST".to_owned(),
            journal_id: Some(journal_id.into()),
            journal_type: Some(journal_type.into()),
        }
    }

    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }
}

/// Identity of the caller, as resolved by the host's auth layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
}

impl AuthenticatedUser {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
