pub const APP_NAME: &str = "github-activity";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent sent with every GitHub API request.
pub fn user_agent() -> String {
    format!("{APP_NAME}/{APP_VERSION}")
}
