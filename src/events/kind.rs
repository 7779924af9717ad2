use strum::{AsRefStr, Display, EnumString};

/// Event types this crate knows how to describe, keyed by their feed `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
pub enum EventKind {
    #[strum(to_string = "CreateEvent")]
    Create,
    #[strum(to_string = "DeleteEvent")]
    Delete,
    #[strum(to_string = "IssuesEvent")]
    Issues,
    #[strum(to_string = "PullRequestEvent")]
    PullRequest,
    #[strum(to_string = "PushEvent")]
    Push,
    #[strum(to_string = "ReleaseEvent")]
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum IssueAction {
    Opened,
    Edited,
    Closed,
    Reopened,
    Assigned,
    Unassigned,
    Labeled,
    Unlabeled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PullRequestAction {
    Opened,
    Closed,
    Reopened,
    Assigned,
    Synchronize,
}
