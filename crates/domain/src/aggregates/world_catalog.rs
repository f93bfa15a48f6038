//! World catalog aggregate - The fixed table of objects commands can name
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: the object list is only reachable through lookups
//! - **Valid by construction**: every `GameObject` already holds a non-empty description
//! - **Immutable**: no `&mut` methods; build a new catalog to change the world

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::common::sorted_unique;
use crate::entities::GameObject;
use crate::value_objects::Kind;

/// An immutable, ordered table of world objects.
///
/// # Example
///
/// ```
/// use parlance_domain::{GameObject, Kind, WorldCatalog};
///
/// let item = Kind::new("item").unwrap();
/// let world = WorldCatalog::new(vec![
///     GameObject::new("soccer ball", item.clone()).unwrap(),
///     GameObject::new("beach ball", item).unwrap(),
/// ]);
///
/// assert_eq!(world.objects_with_noun("ball").len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldCatalog {
    objects: Vec<GameObject>,
}

impl WorldCatalog {
    pub fn new(objects: Vec<GameObject>) -> Self {
        Self { objects }
    }

    /// The full catalog in declaration order.
    pub fn all_objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects whose head noun is exactly `noun`.
    ///
    /// Declaration order is kept; value-equal duplicates appear once.
    pub fn objects_with_noun(&self, noun: &str) -> Vec<&GameObject> {
        let mut seen = HashSet::new();
        self.objects
            .iter()
            .filter(|object| object.head_noun() == noun)
            .filter(|object| seen.insert(*object))
            .collect()
    }

    /// Objects of the given kind in declaration order.
    pub fn objects_of_kind<'a>(
        &'a self,
        kind: &'a Kind,
    ) -> impl Iterator<Item = &'a GameObject> + 'a {
        self.objects
            .iter()
            .filter(move |object| object.kind() == kind)
    }

    pub fn contains_kind(&self, kind: &Kind) -> bool {
        self.objects.iter().any(|object| object.kind() == kind)
    }

    /// A copy with every object description lowercased. Kinds are unchanged.
    pub fn to_lowercase(&self) -> Self {
        Self::new(self.objects.iter().map(GameObject::to_lowercase).collect())
    }

    /// Every kind tag present, ascending and distinct.
    pub fn kinds(&self) -> Vec<Kind> {
        sorted_unique(self.objects.iter().map(|object| object.kind().clone()))
    }
}
