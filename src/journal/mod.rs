//! Journal emotions lookup contract.
//!
//! Hosts resolve authentication and provide an `EmotionRecordStore`; this
//! module decides which table to read, enforces ownership, and maps every
//! outcome to a status code and JSON body.

mod fetch;
mod request;
mod store;

pub use fetch::{FetchError, FetchOutcome, FetchResponse, fetch_journal_emotions};
pub use request::{AuthenticatedUser, FetchEmotionsRequest, JournalKind};
pub use store::{EmotionRecordStore, EmotionRow, InMemoryRecordStore, StoreError};
