//! Vocabulary extraction
//!
//! Derives every word-level set the parser recognizes from the two catalogs.
//! Each set is ascending and duplicate-free; callers may rely on that order
//! (binary search, stable UI hints, equality in tests).

use serde::{Deserialize, Serialize};

use crate::aggregates::{GrammarCatalog, WorldCatalog};
use crate::common::{sorted_unique, words};
use crate::value_objects::{GrammarTemplate, Kind};

/// Read-only view over both catalogs that computes vocabulary sets on demand.
#[derive(Debug, Clone, Copy)]
pub struct VocabularyExtractor<'a> {
    world: &'a WorldCatalog,
    grammar: &'a GrammarCatalog,
}

impl<'a> VocabularyExtractor<'a> {
    pub fn new(world: &'a WorldCatalog, grammar: &'a GrammarCatalog) -> Self {
        Self { world, grammar }
    }

    /// Every description word except each description's last word.
    pub fn adjectives(&self) -> Vec<String> {
        sorted_unique(
            self.world
                .all_objects()
                .iter()
                .flat_map(|object| object.modifiers().iter().cloned()),
        )
    }

    /// The last word of every description.
    pub fn nouns(&self) -> Vec<String> {
        sorted_unique(
            self.world
                .all_objects()
                .iter()
                .map(|object| object.head_noun().to_string()),
        )
    }

    pub fn world_kinds(&self) -> Vec<Kind> {
        self.world.kinds()
    }

    /// The first word of every template.
    pub fn verbs(&self) -> Vec<String> {
        sorted_unique(
            self.grammar
                .all_templates()
                .iter()
                .map(|template| template.verb().to_string()),
        )
    }

    /// Literal words after the verb, space-joined per template; empty results dropped.
    pub fn prepositions(&self) -> Vec<String> {
        sorted_unique(
            self.grammar
                .all_templates()
                .iter()
                .filter_map(GrammarTemplate::preposition),
        )
    }

    /// Literal words joined by `_` per template (`put_in`, `look`).
    pub fn actions(&self) -> Vec<String> {
        sorted_unique(
            self.grammar
                .all_templates()
                .iter()
                .map(GrammarTemplate::action),
        )
    }

    /// Every kind named inside a slot placeholder.
    pub fn grammar_kinds(&self) -> Vec<Kind> {
        sorted_unique(
            self.grammar
                .all_templates()
                .iter()
                .flat_map(GrammarTemplate::slot_kinds)
                .cloned(),
        )
    }

    /// Template literals plus every description word.
    pub fn full_vocabulary(&self) -> Vec<String> {
        let template_words = self
            .grammar
            .all_templates()
            .iter()
            .flat_map(GrammarTemplate::literals)
            .flat_map(words);
        let object_words = self
            .world
            .all_objects()
            .iter()
            .flat_map(|object| object.description().iter().map(String::as_str));

        sorted_unique(template_words.chain(object_words).map(str::to_string))
    }

    /// Compute all sets at once.
    pub fn extract(&self) -> Vocabulary {
        Vocabulary {
            adjectives: self.adjectives(),
            nouns: self.nouns(),
            world_kinds: self.world_kinds(),
            verbs: self.verbs(),
            prepositions: self.prepositions(),
            actions: self.actions(),
            grammar_kinds: self.grammar_kinds(),
            full_vocabulary: self.full_vocabulary(),
        }
    }
}

/// A snapshot of every derived vocabulary set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocabulary {
    pub adjectives: Vec<String>,
    pub nouns: Vec<String>,
    pub world_kinds: Vec<Kind>,
    pub verbs: Vec<String>,
    pub prepositions: Vec<String>,
    pub actions: Vec<String>,
    pub grammar_kinds: Vec<Kind>,
    pub full_vocabulary: Vec<String>,
}

impl Vocabulary {
    pub fn is_preposition(&self, word: &str) -> bool {
        contains_sorted(&self.prepositions, word)
    }

    pub fn is_verb(&self, word: &str) -> bool {
        contains_sorted(&self.verbs, word)
    }

    pub fn is_known_word(&self, word: &str) -> bool {
        contains_sorted(&self.full_vocabulary, word)
    }
}

fn contains_sorted(sorted: &[String], word: &str) -> bool {
    sorted
        .binary_search_by(|probe| probe.as_str().cmp(word))
        .is_ok()
}
