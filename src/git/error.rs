use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GitError {
    #[error("unable to parse, reference type is empty")]
    EmptyRefType,
    #[error("Unsupported Git reference type: {0}")]
    UnsupportedRefType(String),
}
