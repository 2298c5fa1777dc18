//! Identity of a user record.

use serde::{Deserialize, Deserializer, Serialize};

/// Identity key of a user record.
///
/// The member feed is not consistent about whether ids are JSON strings or
/// numbers, so both deserialize into the same string-backed value. Two ids
/// are equal when their textual forms are equal (`"7"` and `7` match).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap an id exactly as given.
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }

    /// The textual form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        UserId(value)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        UserId(value.to_string())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserId {
    Text(String),
    Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawUserId::deserialize(deserializer)? {
            RawUserId::Text(text) => UserId(text),
            RawUserId::Number(number) => UserId(number.to_string()),
        })
    }
}
