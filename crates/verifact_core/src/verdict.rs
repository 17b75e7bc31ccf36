//! Verdict labels for fact-check results.
//!
//! The mapping from model output to a label is total: anything the
//! model says that is not a known label becomes `Uncertain`. Labels
//! from the first-generation Spanish contract are accepted as
//! synonyms so older models still normalize.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed judgment set for a claim's veracity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    True,
    False,
    Misleading,
    Uncertain,
}

impl Verdict {
    /// Parse a model-supplied label. Total: unknown input maps to
    /// `Uncertain`, never an error.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "true" | "verdadero" => Self::True,
            "false" | "falso" => Self::False,
            "misleading" | "engañoso" | "enganoso" => Self::Misleading,
            "uncertain" | "incierto" | "indeterminado" => Self::Uncertain,
            _ => Self::Uncertain,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Misleading => "MISLEADING",
            Self::Uncertain => "UNCERTAIN",
        }
    }

    /// All labels, in the order the output schema declares them.
    pub fn labels() -> [&'static str; 4] {
        ["TRUE", "FALSE", "MISLEADING", "UNCERTAIN"]
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
