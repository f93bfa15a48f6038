//! Interpret a raw player command against the loaded catalogs.

use std::fmt;
use std::sync::Arc;

use parlance_domain::{CommandAnalyzer, TemplateMatch};
use serde::Serialize;

/// One resolved slot, detached from the catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSlot {
    pub kind: String,
    pub phrase: String,
    pub candidates: Vec<String>,
}

/// What the game loop gets back for a command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Interpretation {
    /// The line held no words
    Empty,
    /// No template accepted the command
    Unrecognized {
        command: String,
        has_preposition: bool,
    },
    Matched {
        action: String,
        template: String,
        slots: Vec<ResolvedSlot>,
    },
}

impl From<TemplateMatch<'_>> for Interpretation {
    fn from(matched: TemplateMatch<'_>) -> Self {
        Self::Matched {
            action: matched.action(),
            template: matched.template.raw().to_string(),
            slots: matched
                .bindings
                .iter()
                .map(|binding| ResolvedSlot {
                    kind: binding.kind.to_string(),
                    phrase: binding.phrase_text(),
                    candidates: binding
                        .candidates
                        .iter()
                        .map(|object| object.description_text())
                        .collect(),
                })
                .collect(),
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "(nothing to do)"),
            Self::Unrecognized { command, .. } => write!(f, "I don't understand \"{}\".", command),
            Self::Matched {
                action,
                template,
                slots,
            } => {
                write!(f, "{} ({})", action, template)?;
                for slot in slots {
                    write!(
                        f,
                        "\n  {}: \"{}\" -> {}",
                        slot.kind,
                        slot.phrase,
                        slot.candidates.join(" | ")
                    )?;
                }
                Ok(())
            }
        }
    }
}

/// Normalizes a command line and runs it through the analyzer.
pub struct InterpretCommand {
    analyzer: Arc<CommandAnalyzer>,
    lowercase: bool,
}

impl InterpretCommand {
    pub fn new(analyzer: Arc<CommandAnalyzer>, lowercase: bool) -> Self {
        Self {
            analyzer,
            lowercase,
        }
    }

    pub fn execute(&self, line: &str) -> Interpretation {
        let command = if self.lowercase {
            line.trim().to_lowercase()
        } else {
            line.trim().to_string()
        };

        if parlance_domain::common::words(&command).next().is_none() {
            return Interpretation::Empty;
        }

        match self.analyzer.analyze(&command) {
            Some(matched) => {
                tracing::debug!(
                    command = %command,
                    action = %matched.action(),
                    template = %matched.template,
                    "Command matched"
                );
                matched.into()
            }
            None => {
                let has_preposition = self.analyzer.has_preposition(&command);
                tracing::debug!(command = %command, has_preposition, "Command not recognized");
                Interpretation::Unrecognized {
                    command,
                    has_preposition,
                }
            }
        }
    }
}
