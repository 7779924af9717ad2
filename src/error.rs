use thiserror::Error;

use crate::{backends::github::GitHubError, config::ConfigError, events::EventError};

#[derive(Debug, Error)]
pub enum ErrorCode {
    InvalidConfiguration(#[from] ConfigError),
    GitHub(#[from] GitHubError),
    MalformedEvent(#[from] EventError),
    Output(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCodeDetail {
    internal_code: u8,
    message: String,
}

impl ErrorCode {
    pub fn details(&self) -> ErrorCodeDetail {
        self.into()
    }
}

impl ErrorCodeDetail {
    pub fn new<T: Into<String>>(internal_code: u8, message: T) -> Self {
        Self {
            internal_code,
            message: message.into(),
        }
    }

    pub fn internal_code(&self) -> u8 {
        self.internal_code
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.internal_code)
    }
}

impl From<&ErrorCode> for ErrorCodeDetail {
    fn from(value: &ErrorCode) -> Self {
        match value {
            ErrorCode::InvalidConfiguration(_) => Self::new(3, "Invalid configuration"),
            ErrorCode::GitHub(e) => match e {
                GitHubError::MalformedUsername(_) | GitHubError::MalformedApiUrl(_) => {
                    Self::new(3, "Invalid request")
                }
                GitHubError::Forbidden => Self::new(4, "Access to the activity feed is forbidden"),
                GitHubError::NotFound => Self::new(5, "Unknown user"),
                GitHubError::ServiceUnavailable => Self::new(6, "GitHub is unavailable"),
                GitHubError::UnexpectedStatus(_) => Self::new(7, "Unexpected response from GitHub"),
                GitHubError::MalformedResponse(_) => Self::new(8, "Malformed activity feed"),
                GitHubError::CouldNotBuildClient(_) | GitHubError::CouldNotFetchEvents(_) => {
                    Self::new(9, "Could not reach GitHub")
                }
            },
            ErrorCode::MalformedEvent(_) => Self::new(10, "Malformed event in activity feed"),
            ErrorCode::Output(_) => Self::new(11, "Could not write output"),
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let detail = ErrorCodeDetail::from(self);
        f.write_str(&detail.message)
    }
}
