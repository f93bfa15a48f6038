//! Value objects - Immutable objects defined by their attributes

mod kind;
mod template;

pub use kind::Kind;
pub use template::{GrammarTemplate, TemplateToken};
