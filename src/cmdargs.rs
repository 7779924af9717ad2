use clap::Parser;

use crate::backends::github::Username;

/// Describe the public activity of a GitHub user
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Args {
    /// Telemetry URL (disabled as default)
    #[clap(long)]
    pub telemetry_url: Option<String>,

    /// GitHub API URL (https://api.github.com as default)
    #[clap(long)]
    pub github_api_url: Option<String>,

    /// GitHub API token (anonymous requests as default)
    #[clap(long)]
    pub github_token: Option<String>,

    /// Stop on the first event which cannot be described
    #[clap(long)]
    pub strict: bool,

    /// GitHub username
    pub username: Username,
}
