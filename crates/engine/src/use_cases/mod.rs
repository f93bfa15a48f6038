//! Use cases - what the game loop asks the interpreter to do.

pub mod interpret;

pub use interpret::{InterpretCommand, Interpretation, ResolvedSlot};
