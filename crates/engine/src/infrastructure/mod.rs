//! Infrastructure implementations.
//!
//! Configuration plus the catalog sources behind the [`ports::CatalogSource`] port.

pub mod catalog_files;
pub mod config;
pub mod ports;
