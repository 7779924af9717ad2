use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString};

use super::GitError;

/// Kind of Git reference a create or delete event is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RefType {
    Repository,
    Branch,
    Tag,
}

impl RefType {
    /// Parse the `ref_type` field of an event payload.
    pub fn parse(value: &str) -> Result<Self, GitError> {
        if value.is_empty() {
            return Err(GitError::EmptyRefType);
        }

        Self::from_str(value).map_err(|_| GitError::UnsupportedRefType(value.into()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{GitError, RefType};

    #[test]
    fn test_parse_ref_types() {
        assert_eq!(RefType::parse("repository"), Ok(RefType::Repository));
        assert_eq!(RefType::parse("branch"), Ok(RefType::Branch));
        assert_eq!(RefType::parse("tag"), Ok(RefType::Tag));
    }

    #[test]
    fn test_parse_empty_ref_type() {
        let err = RefType::parse("").unwrap_err();
        assert_eq!(err, GitError::EmptyRefType);
        assert_eq!(err.to_string(), "unable to parse, reference type is empty");
    }

    #[test]
    fn test_parse_unknown_ref_type() {
        assert_eq!(
            RefType::parse("commit"),
            Err(GitError::UnsupportedRefType("commit".into()))
        );
    }

    #[test]
    fn test_display_ref_type() {
        assert_eq!(RefType::Branch.to_string(), "branch");
        assert_eq!(RefType::Repository.as_ref(), "repository");
    }
}
