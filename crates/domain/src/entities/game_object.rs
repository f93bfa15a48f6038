//! GameObject entity - A thing in the world a command can name
//!
//! An object is described by an ordered list of words. The last word is the
//! head noun ("frog" in "small tree frog"); every earlier word is a modifier.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::tokenize;
use crate::error::DomainError;
use crate::value_objects::Kind;

/// A world object with a tokenized description and a kind tag.
///
/// Invariant: `description` holds at least one word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GameObjectRecord", into = "GameObjectRecord")]
pub struct GameObject {
    description: Vec<String>,
    kind: Kind,
}

/// Wire form of a [`GameObject`]: `{"description": "small tree frog", "kind": "item"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GameObjectRecord {
    description: String,
    kind: Kind,
}

impl GameObject {
    /// Create an object from free description text.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the description has no words.
    pub fn new(description: &str, kind: Kind) -> Result<Self, DomainError> {
        let words = tokenize(description);
        if words.is_empty() {
            return Err(DomainError::validation(format!(
                "Object description cannot be empty (kind '{}')",
                kind
            )));
        }
        Ok(Self {
            description: words,
            kind,
        })
    }

    pub fn description(&self) -> &[String] {
        &self.description
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// The last description word.
    pub fn head_noun(&self) -> &str {
        self.description.last().map(String::as_str).unwrap_or_default()
    }

    /// Every description word except the head noun.
    pub fn modifiers(&self) -> &[String] {
        match self.description.split_last() {
            Some((_, modifiers)) => modifiers,
            None => &[],
        }
    }

    pub fn has_word(&self, word: &str) -> bool {
        self.description.iter().any(|w| w == word)
    }

    /// A copy with every description word lowercased.
    pub fn to_lowercase(&self) -> Self {
        Self {
            description: self.description.iter().map(|w| w.to_lowercase()).collect(),
            kind: self.kind.clone(),
        }
    }

    /// Description words joined by single spaces.
    pub fn description_text(&self) -> String {
        self.description.join(" ")
    }
}

impl fmt::Display for GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description_text())
    }
}

impl TryFrom<GameObjectRecord> for GameObject {
    type Error = DomainError;

    fn try_from(record: GameObjectRecord) -> Result<Self, Self::Error> {
        Self::new(&record.description, record.kind)
    }
}

impl From<GameObject> for GameObjectRecord {
    fn from(object: GameObject) -> Self {
        Self {
            description: object.description_text(),
            kind: object.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(tag: &str) -> Kind {
        Kind::new(tag).expect("valid kind")
    }

    #[test]
    fn test_new_tokenizes_description() {
        let frog = GameObject::new("small tree-frog", kind("item")).expect("valid object");
        assert_eq!(frog.description(), &["small", "tree", "frog"]);
        assert_eq!(frog.kind(), &kind("item"));
        assert_eq!(frog.to_string(), "small tree frog");
    }

    #[test]
    fn test_head_noun_and_modifiers() {
        let box_ = GameObject::new("large wooden box", kind("container")).expect("valid object");
        assert_eq!(box_.head_noun(), "box");
        assert_eq!(box_.modifiers(), &["large", "wooden"]);
    }

    #[test]
    fn test_single_word_has_no_modifiers() {
        let north = GameObject::new("north", kind("direction")).expect("valid object");
        assert_eq!(north.head_noun(), "north");
        assert!(north.modifiers().is_empty());
    }

    #[test]
    fn test_empty_description_rejected() {
        assert!(matches!(
            GameObject::new("", kind("item")),
            Err(DomainError::Validation(_))
        ));
        assert!(GameObject::new(" -- ", kind("item")).is_err());
    }

    #[test]
    fn test_has_word_is_exact() {
        let ball = GameObject::new("beach ball", kind("item")).expect("valid object");
        assert!(ball.has_word("ball"));
        assert!(!ball.has_word("bal"));
        assert!(!ball.has_word("Ball"));
    }

    #[test]
    fn test_serde_record_form() {
        let json = r#"{"description":"comfy chair","kind":"object"}"#;
        let chair: GameObject = serde_json::from_str(json).expect("deserialize");
        assert_eq!(chair.head_noun(), "chair");
        assert_eq!(serde_json::to_string(&chair).expect("serialize"), json);
    }

    #[test]
    fn test_serde_rejects_empty_description() {
        let json = r#"{"description":"","kind":"object"}"#;
        assert!(serde_json::from_str::<GameObject>(json).is_err());
    }
}
