use url::Url;

use crate::cmdargs::Args;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

const ENV_TELEMETRY_URL: &str = "GA_TELEMETRY_URL";
const ENV_GITHUB_API_URL: &str = "GA_GITHUB_API_URL";
const ENV_GITHUB_TOKEN: &str = "GA_GITHUB_TOKEN";
const ENV_STRICT: &str = "GA_STRICT";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Malformed GitHub API URL: '{0}'. Make sure you entered a valid http(s) URL.")]
    MalformedApiUrl(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    telemetry_url: Option<String>,
    github_api_url: String,
    github_token: Option<String>,
    strict: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            telemetry_url: env_to_str(ENV_TELEMETRY_URL),
            github_api_url: env_to_str(ENV_GITHUB_API_URL)
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.into()),
            github_token: env_to_str(ENV_GITHUB_TOKEN),
            strict: env_to_bool(ENV_STRICT),
        }
    }

    /// Environment configuration, overridden by command line flags, then validated.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let mut config = Self::from_env();

        if let Some(u) = &args.github_api_url {
            config.set_github_api_url(u.clone());
        }

        if let Some(t) = &args.github_token {
            config.set_github_token(t.clone());
        }

        if let Some(t) = &args.telemetry_url {
            config.set_telemetry_url(t.clone());
        }

        if args.strict {
            config.set_strict(true);
        }

        config.validate_configuration().map(|_| config)
    }

    pub fn empty() -> Self {
        Self {
            telemetry_url: None,
            github_api_url: "".into(),
            github_token: None,
            strict: false,
        }
    }

    pub fn github_api_url(&self) -> &str {
        &self.github_api_url
    }

    pub fn github_token(&self) -> Option<&str> {
        self.github_token.as_deref()
    }

    pub fn telemetry_url(&self) -> Option<&str> {
        self.telemetry_url.as_deref()
    }

    /// Abort on the first malformed event instead of skipping it.
    pub fn strict(&self) -> bool {
        self.strict
    }

    pub fn set_github_api_url<T: Into<String>>(&mut self, value: T) {
        self.github_api_url = value.into();
    }

    pub fn set_github_token<T: Into<String>>(&mut self, value: T) {
        self.github_token = Some(value.into());
    }

    pub fn set_telemetry_url<T: Into<String>>(&mut self, value: T) {
        self.telemetry_url = Some(value.into());
    }

    pub fn set_strict(&mut self, value: bool) {
        self.strict = value;
    }

    pub fn validate_configuration(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.github_api_url)
            .map_err(|_| ConfigError::MalformedApiUrl(self.github_api_url.clone()))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            _ => Err(ConfigError::MalformedApiUrl(self.github_api_url.clone())),
        }
    }
}

fn env_to_str(env_key: &str) -> Option<String> {
    std::env::var(env_key).ok().filter(|s| !s.is_empty())
}

fn env_to_bool(env_key: &str) -> bool {
    env_to_str(env_key).map(|s| parse_bool(&s)).unwrap_or(false)
}

fn parse_bool(value: &str) -> bool {
    matches!(&value.to_lowercase()[..], "1" | "true" | "yes" | "on")
}
