//! Port traits for infrastructure boundaries.
//!
//! The only external dependency the interpreter has is wherever its catalogs
//! are stored. Everything else is concrete types.

use std::path::PathBuf;

use parlance_domain::{GrammarCatalog, WorldCatalog};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error in {name}: {source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Grammar references kinds with no world objects: {0}")]
    InconsistentKinds(String),
}

// =============================================================================
// Catalog Port
// =============================================================================

/// Supplies the static world and grammar tables at startup.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogSource: Send + Sync {
    fn load_world(&self) -> Result<WorldCatalog, CatalogError>;
    fn load_grammar(&self) -> Result<GrammarCatalog, CatalogError>;
}
