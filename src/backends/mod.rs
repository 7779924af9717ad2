pub mod github;
mod source;

pub use source::EventSource;
