use std::{any::Any, fmt::Debug};

use async_trait::async_trait;

use super::github::{EventRecord, GitHubError, Username};

/// Something able to list the public events of a user.
#[async_trait]
pub trait EventSource: Debug + Send + Sync {
    async fn fetch_user_events(&self, username: &Username)
        -> Result<Vec<EventRecord>, GitHubError>;

    fn as_any(&self) -> &dyn Any;
}
