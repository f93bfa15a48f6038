//! Kind tags shared by world objects and grammar slots

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::common::is_word_char;
use crate::error::DomainError;

/// A validated kind tag (non-empty, word characters only, trimmed)
///
/// Kinds classify world objects (`item`, `container`, `direction`, ...) and
/// constrain which objects a grammar slot may resolve to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Kind(String);

impl Kind {
    /// Create a new validated kind tag.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The tag is empty after trimming
    /// - The tag contains anything other than letters, digits, or `_`
    pub fn new(tag: impl Into<String>) -> Result<Self, DomainError> {
        let tag = tag.into();
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Kind tag cannot be empty"));
        }
        if !trimmed.chars().all(is_word_char) {
            return Err(DomainError::validation(format!(
                "Kind tag '{}' may only contain letters, digits, or '_'",
                trimmed
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Kind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Kind {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> String {
        kind.0
    }
}

impl PartialEq<str> for Kind {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Kind {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_valid() {
        let kind = Kind::new("container").expect("valid kind");
        assert_eq!(kind.as_str(), "container");
        assert_eq!(kind, "container");
    }

    #[test]
    fn test_kind_trims_whitespace() {
        let kind = Kind::new("  item ").expect("valid kind");
        assert_eq!(kind.as_str(), "item");
    }

    #[test]
    fn test_kind_empty_rejected() {
        assert!(matches!(Kind::new(""), Err(DomainError::Validation(_))));
        assert!(matches!(Kind::new("   "), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_kind_non_word_chars_rejected() {
        assert!(Kind::new("big box").is_err());
        assert!(Kind::new("{item}").is_err());
        assert!(Kind::new("worn_item").is_ok());
    }

    #[test]
    fn test_kind_ordering_is_lexicographic() {
        let mut kinds = vec![
            Kind::new("person").expect("valid"),
            Kind::new("container").expect("valid"),
            Kind::new("item").expect("valid"),
        ];
        kinds.sort();
        let names: Vec<&str> = kinds.iter().map(Kind::as_str).collect();
        assert_eq!(names, vec!["container", "item", "person"]);
    }

    #[test]
    fn test_kind_serde_roundtrip() {
        let kind = Kind::new("supporter").expect("valid kind");
        let json = serde_json::to_string(&kind).expect("serialize");
        assert_eq!(json, "\"supporter\"");
        let parsed: Kind = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, kind);
    }

    #[test]
    fn test_kind_serde_rejects_invalid() {
        let result: Result<Kind, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
