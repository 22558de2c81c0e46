//! Identifiers captured from the URL path.

use serde::{Deserialize, Serialize};

/// Identifier for a user, carried verbatim from the `{id}` path segment.
///
/// Any non-empty path segment is a valid `UserId`: the demo performs no
/// format validation and no existence check, so the type only guards against
/// mixing the identifier up with other strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
