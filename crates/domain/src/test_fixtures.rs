//! Shared demo catalogs for unit tests.

use crate::aggregates::{GrammarCatalog, WorldCatalog};
use crate::entities::GameObject;
use crate::value_objects::Kind;

pub fn kind(tag: &str) -> Kind {
    Kind::new(tag).expect("valid kind")
}

pub fn object(description: &str, tag: &str) -> GameObject {
    GameObject::new(description, kind(tag)).expect("valid object")
}

/// A small household world covering every kind the demo grammar uses.
pub fn demo_world() -> WorldCatalog {
    WorldCatalog::new(vec![
        object("north", "direction"),
        object("south", "direction"),
        object("east", "direction"),
        object("west", "direction"),
        object("up", "direction"),
        object("down", "direction"),
        object("comfy chair", "object"),
        object("wooden table", "supporter"),
        object("large wooden box", "container"),
        object("old leather bag", "container"),
        object("soccer ball", "item"),
        object("beach ball", "item"),
        object("small tree frog", "item"),
        object("brass key", "item"),
        object("red wool scarf", "clothing"),
        object("old gardener", "person"),
    ])
}

pub fn demo_grammar() -> GrammarCatalog {
    GrammarCatalog::parse_all([
        "look",
        "inventory",
        "go {direction}",
        "take {item}",
        "drop {item}",
        "examine {item}",
        "look at {object}",
        "open {container}",
        "search {container}",
        "put {item} in {container}",
        "put {item} on {supporter}",
        "wear {clothing}",
        "talk to {person}",
        "sit on {object}",
        "give {item} to {person}",
    ])
    .expect("valid grammar")
}
