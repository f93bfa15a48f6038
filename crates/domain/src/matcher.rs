//! Command-to-template matching
//!
//! A template is compiled (at parse time) into literal and slot tokens. A
//! command is tokenized and aligned against those tokens:
//!
//! - the verb and every other literal must equal the command word at its position
//! - each slot captures a contiguous, non-empty run of command words
//! - each captured run must name at least one world object of the slot's kind
//!
//! Alignment is a small backtracking search. A slot tries its longest run
//! first and shrinks only when the capture names no object of its kind or the
//! rest of the template cannot be aligned. Every capture is validated on its
//! own; the whole command text is never used as a stand-in for a slot phrase.

use serde::Serialize;

use crate::aggregates::WorldCatalog;
use crate::common::{tokenize, words};
use crate::entities::GameObject;
use crate::value_objects::{GrammarTemplate, Kind, TemplateToken};
use crate::vocabulary::Vocabulary;

/// True when any word of `text` is a known preposition.
pub fn has_preposition(text: &str, vocabulary: &Vocabulary) -> bool {
    words(text).any(|word| vocabulary.is_preposition(word))
}

/// True when every word of `phrase` appears somewhere in the object's description.
///
/// Word order and repetition are ignored: "tree tree" matches "small tree frog".
/// A phrase with no words names nothing and never matches.
pub fn phrase_matches_object(phrase: &str, object: &GameObject) -> bool {
    let mut phrase_words = words(phrase).peekable();
    phrase_words.peek().is_some() && phrase_words.all(|word| object.has_word(word))
}

fn words_match_object(phrase: &[String], object: &GameObject) -> bool {
    !phrase.is_empty() && phrase.iter().all(|word| object.has_word(word))
}

/// The words a slot captured and the objects they could name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotBinding<'a> {
    pub kind: &'a Kind,
    pub phrase: Vec<String>,
    /// Every object of `kind` the phrase matches, in catalog order (never empty)
    pub candidates: Vec<&'a GameObject>,
}

impl SlotBinding<'_> {
    pub fn phrase_text(&self) -> String {
        self.phrase.join(" ")
    }
}

/// A successful alignment of a command against one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateMatch<'a> {
    pub template: &'a GrammarTemplate,
    /// One binding per slot, in template order
    pub bindings: Vec<SlotBinding<'a>>,
}

impl TemplateMatch<'_> {
    pub fn action(&self) -> String {
        self.template.action()
    }
}

/// Matches commands against templates, resolving slots through a world catalog.
#[derive(Debug, Clone, Copy)]
pub struct PatternMatcher<'a> {
    world: &'a WorldCatalog,
}

impl<'a> PatternMatcher<'a> {
    pub fn new(world: &'a WorldCatalog) -> Self {
        Self { world }
    }

    /// True when `command` aligns with `template` and every slot resolves.
    pub fn command_matches_template(&self, command: &str, template: &'a GrammarTemplate) -> bool {
        self.match_template(command, template).is_some()
    }

    /// Align `command` with `template`, returning each slot's capture and candidates.
    pub fn match_template(
        &self,
        command: &str,
        template: &'a GrammarTemplate,
    ) -> Option<TemplateMatch<'a>> {
        let command_words = tokenize(command);
        let tokens = template.tokens();

        // Every literal and every slot needs at least one word.
        if command_words.len() < tokens.len() {
            return None;
        }

        let mut bindings = Vec::with_capacity(template.slot_count());
        if self.align(tokens, &command_words, &mut bindings) {
            Some(TemplateMatch { template, bindings })
        } else {
            None
        }
    }

    /// Objects of `kind` that `phrase` names.
    pub fn resolve(&self, phrase: &[String], kind: &'a Kind) -> Vec<&'a GameObject> {
        self.world
            .objects_of_kind(kind)
            .filter(|object| words_match_object(phrase, object))
            .collect()
    }

    fn align(
        &self,
        tokens: &'a [TemplateToken],
        command_words: &[String],
        bindings: &mut Vec<SlotBinding<'a>>,
    ) -> bool {
        let Some((token, rest)) = tokens.split_first() else {
            return command_words.is_empty();
        };

        match token {
            TemplateToken::Literal(literal) => match command_words.split_first() {
                Some((word, remaining)) if word == literal => {
                    self.align(rest, remaining, bindings)
                }
                _ => false,
            },
            TemplateToken::Slot(kind) => {
                // Leave one word for each token after this slot.
                let longest = command_words.len().saturating_sub(rest.len());
                for len in (1..=longest).rev() {
                    let (phrase, remaining) = command_words.split_at(len);
                    let candidates = self.resolve(phrase, kind);
                    if candidates.is_empty() {
                        continue;
                    }
                    bindings.push(SlotBinding {
                        kind,
                        phrase: phrase.to_vec(),
                        candidates,
                    });
                    if self.align(rest, remaining, bindings) {
                        return true;
                    }
                    bindings.pop();
                }
                false
            }
        }
    }
}
