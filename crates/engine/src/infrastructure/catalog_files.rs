//! Catalog sources backed by JSON documents.
//!
//! World file: `[{"description": "small tree frog", "kind": "item"}, ...]`
//! Grammar file: `["look", "put {item} in {container}", ...]`

use std::path::{Path, PathBuf};

use parlance_domain::{GrammarCatalog, WorldCatalog};
use serde::de::DeserializeOwned;

use crate::infrastructure::ports::{CatalogError, CatalogSource};

const EMBEDDED_WORLD: &str = include_str!("../../data/world.json");
const EMBEDDED_GRAMMAR: &str = include_str!("../../data/grammar.json");

fn parse_json<T: DeserializeOwned>(name: &str, json: &str) -> Result<T, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Json {
        name: name.to_string(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(&path.display().to_string(), &json)
}

/// Reads both catalogs from JSON files on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalogSource {
    world_path: PathBuf,
    grammar_path: PathBuf,
}

impl JsonFileCatalogSource {
    pub fn new(world_path: impl Into<PathBuf>, grammar_path: impl Into<PathBuf>) -> Self {
        Self {
            world_path: world_path.into(),
            grammar_path: grammar_path.into(),
        }
    }
}

impl CatalogSource for JsonFileCatalogSource {
    fn load_world(&self) -> Result<WorldCatalog, CatalogError> {
        read_json(&self.world_path)
    }

    fn load_grammar(&self) -> Result<GrammarCatalog, CatalogError> {
        read_json(&self.grammar_path)
    }
}

/// The demo household world compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalogSource;

impl CatalogSource for EmbeddedCatalogSource {
    fn load_world(&self) -> Result<WorldCatalog, CatalogError> {
        parse_json("embedded world", EMBEDDED_WORLD)
    }

    fn load_grammar(&self) -> Result<GrammarCatalog, CatalogError> {
        parse_json("embedded grammar", EMBEDDED_GRAMMAR)
    }
}
