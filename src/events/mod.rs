//! Turn raw feed records into human-readable descriptions.

mod error;
mod event;
mod kind;

pub use self::error::EventError;
pub use self::event::{describe_record, Event, EventPayload};
pub use self::kind::{EventKind, IssueAction, PullRequestAction};
