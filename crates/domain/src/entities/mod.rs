//! Domain entities - Objects that make up the world

mod game_object;

pub use game_object::GameObject;
