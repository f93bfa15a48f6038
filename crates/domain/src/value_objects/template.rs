//! Grammar templates - command patterns rooted at a verb
//!
//! Templates are written the way a player would type the command, with
//! typed placeholders standing in for object phrases:
//!
//! - `look`
//! - `take {item}`
//! - `put {item} in {container}`
//!
//! Parsing compiles the text once into a sequence of [`TemplateToken`]s, which
//! is the form the matcher walks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Kind;
use crate::common::words;
use crate::error::DomainError;

/// One position in a compiled template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemplateToken {
    /// A word the command must contain verbatim at this position
    Literal(String),
    /// A run of one or more command words naming an object of this kind
    Slot(Kind),
}

impl TemplateToken {
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(word) => Some(word),
            Self::Slot(_) => None,
        }
    }

    pub fn as_slot(&self) -> Option<&Kind> {
        match self {
            Self::Literal(_) => None,
            Self::Slot(kind) => Some(kind),
        }
    }
}

/// A parsed grammar template.
///
/// Invariant: `tokens` is non-empty and starts with a literal (the verb).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GrammarTemplate {
    raw: String,
    tokens: Vec<TemplateToken>,
}

impl GrammarTemplate {
    /// Parse template text like `"put {item} in {container}"`.
    ///
    /// Whitespace separates pieces. A `{kind}` piece becomes a slot; every
    /// other piece is tokenized into literal words.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Parse` if:
    /// - The template has no tokens
    /// - The first token is a slot rather than a verb
    /// - The text does not begin with the verb itself (e.g. `"(look)"`)
    /// - A placeholder has unbalanced braces or an invalid kind
    pub fn parse(text: impl Into<String>) -> Result<Self, DomainError> {
        let raw = text.into().trim().to_string();
        let mut tokens = Vec::new();

        for piece in raw.split_whitespace() {
            if let Some(inner) = piece.strip_prefix('{') {
                let tag = inner.strip_suffix('}').ok_or_else(|| {
                    DomainError::parse(format!(
                        "Unterminated slot placeholder '{}' in template '{}'",
                        piece, raw
                    ))
                })?;
                let kind = Kind::new(tag).map_err(|err| {
                    DomainError::parse(format!(
                        "Invalid slot placeholder '{}' in template '{}': {}",
                        piece, raw, err
                    ))
                })?;
                tokens.push(TemplateToken::Slot(kind));
                continue;
            }

            if piece.contains(|c: char| c == '{' || c == '}') {
                return Err(DomainError::parse(format!(
                    "Stray brace in '{}' of template '{}'",
                    piece, raw
                )));
            }

            tokens.extend(words(piece).map(|word| TemplateToken::Literal(word.to_string())));
        }

        match tokens.first() {
            None => Err(DomainError::parse("Grammar template cannot be empty")),
            Some(TemplateToken::Slot(_)) => Err(DomainError::parse(format!(
                "Grammar template '{}' must start with a verb, not a slot",
                raw
            ))),
            Some(TemplateToken::Literal(verb)) if !raw.starts_with(verb.as_str()) => {
                Err(DomainError::parse(format!(
                    "Grammar template '{}' must begin with its verb '{}'",
                    raw, verb
                )))
            }
            Some(TemplateToken::Literal(_)) => Ok(Self { raw, tokens }),
        }
    }

    /// A copy with every literal word lowercased. Slot kinds are left as written.
    pub fn to_lowercase(&self) -> Self {
        let mut raw = String::with_capacity(self.raw.len());
        let mut in_slot = false;
        for c in self.raw.chars() {
            match c {
                '{' => in_slot = true,
                '}' => in_slot = false,
                _ => {}
            }
            if in_slot {
                raw.push(c);
            } else {
                raw.extend(c.to_lowercase());
            }
        }

        let tokens = self
            .tokens
            .iter()
            .map(|token| match token {
                TemplateToken::Literal(word) => TemplateToken::Literal(word.to_lowercase()),
                TemplateToken::Slot(kind) => TemplateToken::Slot(kind.clone()),
            })
            .collect();

        Self { raw, tokens }
    }

    /// The template text as written (trimmed).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[TemplateToken] {
        &self.tokens
    }

    /// The leading literal.
    pub fn verb(&self) -> &str {
        // Parsing guarantees a leading literal; the fallback is unreachable.
        self.tokens
            .first()
            .and_then(TemplateToken::as_literal)
            .unwrap_or_default()
    }

    /// Every literal word in order, verb included.
    pub fn literals(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().filter_map(TemplateToken::as_literal)
    }

    /// Every slot kind in order.
    pub fn slot_kinds(&self) -> impl Iterator<Item = &Kind> + '_ {
        self.tokens.iter().filter_map(TemplateToken::as_slot)
    }

    pub fn slot_count(&self) -> usize {
        self.slot_kinds().count()
    }

    /// Canonical action identifier: literal words joined by `_`.
    ///
    /// `put {item} in {container}` becomes `put_in`.
    pub fn action(&self) -> String {
        self.literals().collect::<Vec<_>>().join("_")
    }

    /// Literal words after the verb joined by single spaces, if any.
    ///
    /// `take {item} out of {container}` yields `"out of"`; `take {item}` yields `None`.
    pub fn preposition(&self) -> Option<String> {
        let rest: Vec<&str> = self.literals().skip(1).collect();
        if rest.is_empty() {
            None
        } else {
            Some(rest.join(" "))
        }
    }
}

impl fmt::Display for GrammarTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for GrammarTemplate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GrammarTemplate {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<GrammarTemplate> for String {
    fn from(template: GrammarTemplate) -> String {
        template.raw
    }
}
