//! User identity.
//!
//! Users are identified by the name they type. There is no registration
//! step, so the name itself is the ledger key: two actions belong to the
//! same user exactly when their names are equal after trimming surrounding
//! whitespace. Case is significant.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Ledger key for a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    /// Build a user id from a typed name.
    ///
    /// Leading and trailing whitespace is dropped so that `"Alice "` and
    /// `"Alice"` address the same ledger entry. An empty name is rejected.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for UserId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
