//! Command analyzer - the facade the game loop talks to
//!
//! Owns both catalogs for the lifetime of the process. The derived vocabulary
//! is computed on first use and then shared read-only, so an analyzer can sit
//! behind an `Arc` and serve any number of threads without locking.

use std::sync::OnceLock;

use crate::aggregates::{GrammarCatalog, WorldCatalog};
use crate::common::words;
use crate::entities::GameObject;
use crate::matcher::{self, PatternMatcher, TemplateMatch};
use crate::value_objects::GrammarTemplate;
use crate::vocabulary::{Vocabulary, VocabularyExtractor};

#[derive(Debug)]
pub struct CommandAnalyzer {
    world: WorldCatalog,
    grammar: GrammarCatalog,
    vocabulary: OnceLock<Vocabulary>,
}

impl CommandAnalyzer {
    pub fn new(world: WorldCatalog, grammar: GrammarCatalog) -> Self {
        Self {
            world,
            grammar,
            vocabulary: OnceLock::new(),
        }
    }

    pub fn world(&self) -> &WorldCatalog {
        &self.world
    }

    pub fn grammar(&self) -> &GrammarCatalog {
        &self.grammar
    }

    /// Every derived word set, computed once.
    pub fn vocabulary(&self) -> &Vocabulary {
        self.vocabulary
            .get_or_init(|| VocabularyExtractor::new(&self.world, &self.grammar).extract())
    }

    pub fn extractor(&self) -> VocabularyExtractor<'_> {
        VocabularyExtractor::new(&self.world, &self.grammar)
    }

    pub fn matcher(&self) -> PatternMatcher<'_> {
        PatternMatcher::new(&self.world)
    }

    pub fn has_preposition(&self, text: &str) -> bool {
        matcher::has_preposition(text, self.vocabulary())
    }

    pub fn phrase_matches_object(&self, phrase: &str, object: &GameObject) -> bool {
        matcher::phrase_matches_object(phrase, object)
    }

    pub fn command_matches_template<'a>(
        &'a self,
        command: &str,
        template: &'a GrammarTemplate,
    ) -> bool {
        self.matcher().command_matches_template(command, template)
    }

    /// Find the first template (catalog order) the command matches.
    ///
    /// Candidates are narrowed with [`GrammarCatalog::templates_starting_with`]
    /// on the command's first word before any alignment is attempted.
    pub fn analyze(&self, command: &str) -> Option<TemplateMatch<'_>> {
        let verb = words(command).next()?;
        let matcher = self.matcher();
        self.grammar
            .templates_starting_with(verb)
            .into_iter()
            .find_map(|template| matcher.match_template(command, template))
    }
}
