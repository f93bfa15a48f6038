//! Common utility functions shared across the domain.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **One tokenizer** - command text, object descriptions, and template
//!   literals all go through [`words`]

pub mod words;

// Re-export commonly used functions at crate root for convenience
pub use words::{is_word_char, sorted_unique, tokenize, words};
