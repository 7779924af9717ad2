use thiserror::Error;

use crate::git::GitError;

use super::EventKind;

/// Failure to describe a single feed event. The rest of the feed is unaffected.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("malformed {event} payload: {source}")]
    MalformedPayload {
        event: EventKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("{event}: {source}")]
    RefType {
        event: EventKind,
        #[source]
        source: GitError,
    },

    #[error("{event}: unsupported action '{action}'")]
    UnsupportedAction { event: EventKind, action: String },

    #[error("{event}: missing field '{field}'")]
    MissingField {
        event: EventKind,
        field: &'static str,
    },

    #[error("PushEvent: push contains no commits")]
    EmptyPush,
}

impl EventError {
    pub fn missing(event: EventKind, field: &'static str) -> Self {
        Self::MissingField { event, field }
    }
}
