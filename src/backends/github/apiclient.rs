use std::{any::Any, time::Duration};

use async_trait::async_trait;
use reqwest::{header::ACCEPT, StatusCode};
use url::Url;

use crate::{app_info::user_agent, backends::EventSource, config::Config};

use super::{check_status_code, error::GitHubError, EventRecord, Username};

const GITHUB_JSON_MEDIA_TYPE: &str = "application/vnd.github+json";

#[derive(Debug)]
pub struct Client {
    api_url: String,
    token: Option<String>,
}

impl Client {
    pub fn new<T: Into<String>>(api_url: T) -> Self {
        Self {
            api_url: api_url.into(),
            token: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let client = Self::new(config.github_api_url());
        match config.github_token() {
            Some(token) => client.with_token(token),
            None => client,
        }
    }

    pub fn with_token<T: Into<String>>(mut self, token: T) -> Self {
        self.token = Some(token.into());
        self
    }

    /// List the public events of a user, most recent first.
    #[tracing::instrument(skip(self))]
    pub async fn list_user_events(
        &self,
        username: &Username,
    ) -> Result<Vec<EventRecord>, GitHubError> {
        let url = self.events_url(username)?;
        let mut request = self
            .create_client()?
            .get(url)
            .header(ACCEPT, GITHUB_JSON_MEDIA_TYPE);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request
            .send()
            .await
            .map_err(GitHubError::CouldNotFetchEvents)?;

        check_status_code(resp.status())?;
        tracing::debug!(status = resp.status().as_u16(), message = "Success");

        // No body comes with a 304, the feed has no new events.
        if resp.status() == StatusCode::NOT_MODIFIED {
            return Ok(Vec::new());
        }

        let events: Vec<EventRecord> = resp
            .json()
            .await
            .map_err(GitHubError::MalformedResponse)?;

        tracing::info!(
            count = events.len(),
            message = "Events fetched",
            username = username.as_str()
        );

        Ok(events)
    }

    fn create_client(&self) -> Result<reqwest::Client, GitHubError> {
        reqwest::ClientBuilder::new()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent())
            .build()
            .map_err(GitHubError::CouldNotBuildClient)
    }

    fn events_url(&self, username: &Username) -> Result<Url, GitHubError> {
        let malformed = || GitHubError::MalformedApiUrl(self.api_url.clone());
        let mut url = Url::parse(&self.api_url).map_err(|_| malformed())?;

        url.path_segments_mut()
            .map_err(|_| malformed())?
            .pop_if_empty()
            .extend(["users", username.as_str(), "events"]);

        Ok(url)
    }
}

#[async_trait]
impl EventSource for Client {
    async fn fetch_user_events(
        &self,
        username: &Username,
    ) -> Result<Vec<EventRecord>, GitHubError> {
        self.list_user_events(username).await
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
