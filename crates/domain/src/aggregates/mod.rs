//! Aggregate roots - domain objects that own their related data
//!
//! Both catalogs are loaded once and never mutated. They expose lookups,
//! not fields, and are shared by reference with the extractor and matcher.

pub mod grammar_catalog;
pub mod world_catalog;

pub use grammar_catalog::GrammarCatalog;
pub use world_catalog::WorldCatalog;
