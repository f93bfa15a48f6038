//! Parlance domain: the command-understanding core of a text adventure.
//!
//! - [`WorldCatalog`] and [`GrammarCatalog`] hold the static world objects and
//!   command templates
//! - [`VocabularyExtractor`] derives the recognizable word sets from them
//! - [`PatternMatcher`] aligns player commands with templates and resolves
//!   each slot to objects of the required kind
//! - [`CommandAnalyzer`] ties the pieces together for the game loop

pub mod aggregates;
pub mod analyzer;
pub mod common;
pub mod entities;
pub mod error;
pub mod matcher;
pub mod value_objects;
pub mod vocabulary;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use aggregates::{GrammarCatalog, WorldCatalog};
pub use analyzer::CommandAnalyzer;
pub use entities::GameObject;
pub use error::DomainError;
pub use matcher::{has_preposition, phrase_matches_object, PatternMatcher, SlotBinding, TemplateMatch};
pub use value_objects::{GrammarTemplate, Kind, TemplateToken};
pub use vocabulary::{Vocabulary, VocabularyExtractor};
