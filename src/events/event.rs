use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::{
    backends::github::{
        CreateEvent, DeleteEvent, EventRecord, IssuesEvent, PullRequestEvent, PushEvent, User,
    },
    git::{GitError, RefType},
};

use super::{EventError, EventKind, IssueAction, PullRequestAction};

/// A feed event whose payload was decoded according to its type tag.
#[derive(Debug, Clone)]
pub struct Event {
    repo: String,
    payload: EventPayload,
}

#[derive(Debug, Clone)]
pub enum EventPayload {
    Create(CreateEvent),
    Delete(DeleteEvent),
    Issues(IssuesEvent),
    PullRequest(PullRequestEvent),
    Push(PushEvent),
    Release,
}

impl Event {
    /// Decode a raw record. Returns `Ok(None)` for event types without a description.
    pub fn from_record(record: &EventRecord) -> Result<Option<Self>, EventError> {
        let kind = match EventKind::from_str(&record.event_type) {
            Ok(kind) => kind,
            Err(_) => return Ok(None),
        };

        let payload = match kind {
            EventKind::Create => EventPayload::Create(decode_payload(record, kind)?),
            EventKind::Delete => EventPayload::Delete(decode_payload(record, kind)?),
            EventKind::Issues => EventPayload::Issues(decode_payload(record, kind)?),
            EventKind::PullRequest => EventPayload::PullRequest(decode_payload(record, kind)?),
            EventKind::Push => EventPayload::Push(decode_payload(record, kind)?),
            EventKind::Release => EventPayload::Release,
        };

        Ok(Some(Self {
            repo: record.repo_name().to_owned(),
            payload,
        }))
    }

    pub fn kind(&self) -> EventKind {
        match &self.payload {
            EventPayload::Create(_) => EventKind::Create,
            EventPayload::Delete(_) => EventKind::Delete,
            EventPayload::Issues(_) => EventKind::Issues,
            EventPayload::PullRequest(_) => EventKind::PullRequest,
            EventPayload::Push(_) => EventKind::Push,
            EventPayload::Release => EventKind::Release,
        }
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn describe(&self) -> Result<String, EventError> {
        let repo = &self.repo;

        match &self.payload {
            EventPayload::Create(p) => describe_create(p, repo),
            EventPayload::Delete(p) => describe_delete(p, repo),
            EventPayload::Issues(p) => describe_issues(p, repo),
            EventPayload::PullRequest(p) => describe_pull_request(p, repo),
            EventPayload::Push(p) => describe_push(p, repo),
            EventPayload::Release => Ok(format!("{}: {}", EventKind::Release, repo)),
        }
    }
}

/// Describe a raw record in one line, or `None` when its type is not handled.
pub fn describe_record(record: &EventRecord) -> Result<Option<String>, EventError> {
    Event::from_record(record)?
        .map(|event| event.describe())
        .transpose()
}

fn decode_payload<T: DeserializeOwned>(
    record: &EventRecord,
    event: EventKind,
) -> Result<T, EventError> {
    record
        .decode_payload()
        .map_err(|source| EventError::MalformedPayload { event, source })
}

fn parse_ref_type(event: EventKind, value: Option<&str>) -> Result<RefType, EventError> {
    RefType::parse(value.unwrap_or_default())
        .map_err(|source| EventError::RefType { event, source })
}

fn parse_action<A: FromStr>(event: EventKind, value: Option<&str>) -> Result<A, EventError> {
    let action = value
        .filter(|a| !a.is_empty())
        .ok_or_else(|| EventError::missing(event, "action"))?;

    A::from_str(action).map_err(|_| EventError::UnsupportedAction {
        event,
        action: action.into(),
    })
}

fn login<'a>(
    event: EventKind,
    user: Option<&'a User>,
    field: &'static str,
) -> Result<&'a str, EventError> {
    user.and_then(|u| u.login.as_deref())
        .ok_or_else(|| EventError::missing(event, field))
}

fn describe_create(payload: &CreateEvent, repo: &str) -> Result<String, EventError> {
    let ref_type = parse_ref_type(EventKind::Create, payload.ref_type.as_deref())?;
    Ok(format!("Created new {ref_type} {repo}"))
}

fn describe_delete(payload: &DeleteEvent, repo: &str) -> Result<String, EventError> {
    let event = EventKind::Delete;

    match parse_ref_type(event, payload.ref_type.as_deref())? {
        RefType::Repository => Err(EventError::RefType {
            event,
            source: GitError::UnsupportedRefType(RefType::Repository.to_string()),
        }),
        ref_type => Ok(format!("Deleted {ref_type} {repo}")),
    }
}

fn describe_issues(payload: &IssuesEvent, repo: &str) -> Result<String, EventError> {
    let event = EventKind::Issues;
    let action: IssueAction = parse_action(event, payload.action.as_deref())?;

    let issue = payload.issue.as_ref();
    let number = issue
        .and_then(|i| i.number)
        .ok_or_else(|| EventError::missing(event, "issue.number"))?;
    let title = issue
        .and_then(|i| i.title.as_deref())
        .ok_or_else(|| EventError::missing(event, "issue.title"))?;
    let label = || {
        payload
            .label
            .as_ref()
            .and_then(|l| l.name.as_deref())
            .ok_or_else(|| EventError::missing(event, "label.name"))
    };

    let prefix = format!("Issue {number}. {title} for {repo} is");
    let assignee = payload.assignee.as_ref();

    Ok(match action {
        IssueAction::Opened | IssueAction::Edited | IssueAction::Closed | IssueAction::Reopened => {
            format!("{prefix} {action}")
        }
        IssueAction::Assigned => format!(
            "{prefix} assigned to {}",
            login(event, assignee, "assignee.login")?
        ),
        IssueAction::Unassigned => format!(
            "{prefix} unassigned from {}",
            login(event, assignee, "assignee.login")?
        ),
        IssueAction::Labeled => format!("{prefix} labeled with {}", label()?),
        IssueAction::Unlabeled => format!("{prefix} unlabeled from {}", label()?),
    })
}

fn describe_pull_request(payload: &PullRequestEvent, repo: &str) -> Result<String, EventError> {
    let event = EventKind::PullRequest;
    let action: PullRequestAction = parse_action(event, payload.action.as_deref())?;

    let pull_request = payload.pull_request.as_ref();
    let number = payload
        .number
        .or_else(|| pull_request.and_then(|p| p.number))
        .ok_or_else(|| EventError::missing(event, "number"))?;
    let title = pull_request
        .and_then(|p| p.title.as_deref())
        .ok_or_else(|| EventError::missing(event, "pull_request.title"))?;

    let prefix = format!("Pull request {number}. {title} for {repo} is");
    let mut line = match action {
        PullRequestAction::Opened | PullRequestAction::Closed | PullRequestAction::Reopened => {
            format!("{prefix} {action}")
        }
        PullRequestAction::Assigned => format!(
            "{prefix} assigned to {}",
            login(event, payload.assignee.as_ref(), "assignee.login")?
        ),
        PullRequestAction::Synchronize => format!("{prefix} synchronized"),
    };

    if let Some(url) = pull_request.and_then(|p| p.html_url.as_deref()) {
        line.push_str(&format!(" ({url})"));
    }

    Ok(line)
}

fn describe_push(payload: &PushEvent, repo: &str) -> Result<String, EventError> {
    match payload.commit_count() {
        None => Err(EventError::missing(EventKind::Push, "size")),
        Some(0) => Err(EventError::EmptyPush),
        Some(1) => Ok(format!("Pushed 1 commit to {repo}")),
        Some(size) => Ok(format!("Pushed {size} commits to {repo}")),
    }
}
