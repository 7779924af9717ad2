mod error;
mod ref_type;

pub use self::error::GitError;
pub use self::ref_type::RefType;
