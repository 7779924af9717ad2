use serde::{
    de::{DeserializeOwned, IgnoredAny},
    Deserialize,
};
use serde_json::Value;

/// One entry of a user activity feed, with its payload left undecoded.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "type")]
    pub event_type: String,
    pub repo: EventRepository,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRepository {
    pub name: String,
}

impl EventRecord {
    pub fn repo_name(&self) -> &str {
        &self.repo.name
    }

    pub fn decode_payload<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.payload)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEvent {
    pub ref_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteEvent {
    pub ref_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssuesEvent {
    pub action: Option<String>,
    pub issue: Option<Issue>,
    pub assignee: Option<User>,
    pub label: Option<Label>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Issue {
    pub number: Option<u64>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    pub login: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Label {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestEvent {
    pub action: Option<String>,
    pub number: Option<u64>,
    pub pull_request: Option<PullRequest>,
    pub assignee: Option<User>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequest {
    pub number: Option<u64>,
    pub title: Option<String>,
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushEvent {
    pub size: Option<u64>,
    /// Only counted, commit contents are never read.
    pub commits: Option<Vec<IgnoredAny>>,
}

impl PushEvent {
    /// Number of pushed commits, falling back on the commit list when `size` is absent.
    pub fn commit_count(&self) -> Option<u64> {
        self.size.or_else(|| self.commits.as_ref().map(|c| c.len() as u64))
    }
}
