use std::{fmt, str::FromStr};

use super::GitHubError;

const MAX_USERNAME_LEN: usize = 39;

/// A GitHub login, validated before being put in a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub fn new(value: &str) -> Result<Self, GitHubError> {
        if Self::is_valid(value) {
            Ok(Self(value.into()))
        } else {
            Err(GitHubError::MalformedUsername(value.into()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(value: &str) -> bool {
        !value.is_empty()
            && value.len() <= MAX_USERNAME_LEN
            && !value.starts_with('-')
            && !value.ends_with('-')
            && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    }
}

impl FromStr for Username {
    type Err = GitHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
