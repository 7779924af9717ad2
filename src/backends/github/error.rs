use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("error while building HTTP client.")]
    CouldNotBuildClient(#[source] reqwest::Error),

    #[error("error while fetching events.")]
    CouldNotFetchEvents(#[source] reqwest::Error),

    #[error("forbidden")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("service unavailable")]
    ServiceUnavailable,

    #[error("unexpected status code received from GitHub: {0}.")]
    UnexpectedStatus(u16),

    #[error("error while parsing GitHub response.")]
    MalformedResponse(#[source] reqwest::Error),

    #[error("Malformed username: '{0}'.")]
    MalformedUsername(String),

    #[error("Malformed GitHub API URL: '{0}'.")]
    MalformedApiUrl(String),
}
