//! Parlance Engine library.
//!
//! Hosts the command-understanding core for a game loop.
//!
//! ## Structure
//!
//! - `infrastructure/` - Configuration and catalog sources (ports + adapters)
//! - `use_cases/` - Command interpretation on top of the domain analyzer
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
