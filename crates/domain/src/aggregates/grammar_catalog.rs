//! Grammar catalog aggregate - The fixed list of command templates

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::WorldCatalog;
use crate::common::sorted_unique;
use crate::error::DomainError;
use crate::value_objects::{GrammarTemplate, Kind};

/// An immutable, ordered list of grammar templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrammarCatalog {
    templates: Vec<GrammarTemplate>,
}

impl GrammarCatalog {
    pub fn new(templates: Vec<GrammarTemplate>) -> Self {
        Self { templates }
    }

    /// Parse every template text, failing on the first malformed one.
    pub fn parse_all<I, S>(texts: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let templates = texts
            .into_iter()
            .map(GrammarTemplate::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(templates))
    }

    /// All templates in declaration order.
    pub fn all_templates(&self) -> &[GrammarTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// A copy with every template's literal words lowercased.
    pub fn to_lowercase(&self) -> Self {
        Self::new(
            self.templates
                .iter()
                .map(GrammarTemplate::to_lowercase)
                .collect(),
        )
    }

    /// Templates whose raw text begins with `verb` as a character prefix.
    ///
    /// This is a string-prefix test, so `"loo"` also selects `"look at {object}"`.
    /// Declaration order is kept and templates with identical text appear once.
    pub fn templates_starting_with(&self, verb: &str) -> Vec<&GrammarTemplate> {
        let mut seen = HashSet::new();
        self.templates
            .iter()
            .filter(|template| template.raw().starts_with(verb))
            .filter(|template| seen.insert(template.raw()))
            .collect()
    }

    /// Slot kinds that no object in `world` carries, ascending and distinct.
    ///
    /// Templates using such a kind can never match.
    pub fn unknown_kinds(&self, world: &WorldCatalog) -> Vec<Kind> {
        sorted_unique(
            self.templates
                .iter()
                .flat_map(GrammarTemplate::slot_kinds)
                .filter(|kind| !world.contains_kind(kind))
                .cloned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{demo_grammar, demo_world, object};

    fn raws<'a>(templates: impl IntoIterator<Item = &'a GrammarTemplate>) -> Vec<&'a str> {
        templates.into_iter().map(GrammarTemplate::raw).collect()
    }

    #[test]
    fn test_all_templates_in_declaration_order() {
        let grammar = demo_grammar();
        assert_eq!(grammar.all_templates()[0].raw(), "look");
        assert_eq!(grammar.len(), 15);
    }

    #[test]
    fn test_templates_starting_with_put() {
        let grammar = demo_grammar();
        assert_eq!(
            raws(grammar.templates_starting_with("put")),
            vec!["put {item} in {container}", "put {item} on {supporter}"]
        );
    }

    #[test]
    fn test_templates_starting_with_collapses_duplicates() {
        let grammar = GrammarCatalog::parse_all(["take {item}", "talk to {person}", "take {item}"])
            .expect("valid grammar");
        assert_eq!(
            raws(grammar.templates_starting_with("take")),
            vec!["take {item}"]
        );
    }

    #[test]
    fn test_templates_starting_with_is_a_string_prefix() {
        let grammar = demo_grammar();
        assert_eq!(
            raws(grammar.templates_starting_with("loo")),
            vec!["look", "look at {object}"]
        );
        assert_eq!(
            raws(grammar.templates_starting_with("ta")),
            vec!["take {item}", "talk to {person}"]
        );
    }

    #[test]
    fn test_templates_starting_with_unknown_verb() {
        assert!(demo_grammar().templates_starting_with("dance").is_empty());
    }

    #[test]
    fn test_parse_all_reports_bad_template() {
        let err = GrammarCatalog::parse_all(["look", "take {item"]).expect_err("malformed");
        assert!(err.to_string().contains("take {item"));
    }

    #[test]
    fn test_unknown_kinds() {
        assert!(demo_grammar().unknown_kinds(&demo_world()).is_empty());

        let world = WorldCatalog::new(vec![object("brass key", "item")]);
        let grammar =
            GrammarCatalog::parse_all(["take {item}", "ride {vehicle}", "drive {vehicle}", "feed {animal}"])
                .expect("valid grammar");
        let unknown: Vec<String> = grammar
            .unknown_kinds(&world)
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(unknown, vec!["animal", "vehicle"]);
    }

    #[test]
    fn test_to_lowercase_keeps_prefix_lookup_working() {
        let grammar = GrammarCatalog::parse_all(["Greet {person}", "LOOK"])
            .expect("valid grammar")
            .to_lowercase();
        assert_eq!(raws(grammar.templates_starting_with("greet")), vec!["greet {person}"]);
        assert_eq!(raws(grammar.templates_starting_with("look")), vec!["look"]);
    }

    #[test]
    fn test_serde_list_of_strings() {
        let grammar: GrammarCatalog =
            serde_json::from_str(r#"["look", "go {direction}"]"#).expect("deserialize");
        assert_eq!(grammar.len(), 2);
        assert!(serde_json::from_str::<GrammarCatalog>(r#"["{direction}"]"#).is_err());
    }
}
