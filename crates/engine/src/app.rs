//! Application state and composition.

use std::sync::Arc;

use parlance_domain::CommandAnalyzer;

use crate::infrastructure::catalog_files::{EmbeddedCatalogSource, JsonFileCatalogSource};
use crate::infrastructure::config::{CatalogLocation, EngineConfig};
use crate::infrastructure::ports::{CatalogError, CatalogSource};
use crate::use_cases::InterpretCommand;

/// Main application state.
///
/// Holds the analyzer built from the loaded catalogs and the use cases on top of it.
pub struct App {
    pub analyzer: Arc<CommandAnalyzer>,
    pub interpret: InterpretCommand,
}

impl App {
    /// Build from the catalog location named in `config`.
    pub fn from_config(config: &EngineConfig) -> Result<Self, CatalogError> {
        match &config.catalogs {
            CatalogLocation::Embedded => {
                tracing::info!("Using embedded demo catalogs");
                Self::from_source(&EmbeddedCatalogSource, config)
            }
            CatalogLocation::Files { world, grammar } => {
                tracing::info!(world = %world.display(), grammar = %grammar.display(), "Loading catalogs from files");
                Self::from_source(&JsonFileCatalogSource::new(world, grammar), config)
            }
        }
    }

    /// Load both catalogs, check that every slot kind exists, and wire the use cases.
    ///
    /// With `lowercase_commands` on, descriptions and template literals are
    /// lowercased to agree with the normalized commands.
    pub fn from_source(
        source: &dyn CatalogSource,
        config: &EngineConfig,
    ) -> Result<Self, CatalogError> {
        let mut world = source.load_world()?;
        let mut grammar = source.load_grammar()?;
        if config.lowercase_commands {
            world = world.to_lowercase();
            grammar = grammar.to_lowercase();
        }

        let unknown = grammar.unknown_kinds(&world);
        if !unknown.is_empty() {
            let kinds = unknown
                .iter()
                .map(|kind| kind.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            if config.strict_kinds {
                return Err(CatalogError::InconsistentKinds(kinds));
            }
            tracing::warn!(kinds = %kinds, "Templates using these kinds can never match");
        }

        tracing::info!(
            objects = world.len(),
            templates = grammar.len(),
            "Catalogs loaded"
        );

        let analyzer = Arc::new(CommandAnalyzer::new(world, grammar));
        Ok(Self {
            interpret: InterpretCommand::new(Arc::clone(&analyzer), config.lowercase_commands),
            analyzer,
        })
    }
}
