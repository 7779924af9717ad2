use reqwest::StatusCode;

use super::GitHubError;

/// Map a GitHub API response status to success or a named failure.
///
/// Only `200 OK` and `304 Not Modified` are accepted, every other code fails.
pub fn check_status_code(status: StatusCode) -> Result<(), GitHubError> {
    match status {
        StatusCode::OK | StatusCode::NOT_MODIFIED => Ok(()),
        StatusCode::FORBIDDEN => Err(GitHubError::Forbidden),
        StatusCode::NOT_FOUND => Err(GitHubError::NotFound),
        StatusCode::SERVICE_UNAVAILABLE => Err(GitHubError::ServiceUnavailable),
        other => Err(GitHubError::UnexpectedStatus(other.as_u16())),
    }
}
