mod apiclient;
mod error;
mod models;
mod status;
mod username;

#[cfg(test)]
mod tests;

pub use apiclient::*;
pub use error::GitHubError;
pub use models::*;
pub use status::check_status_code;
pub use username::Username;
