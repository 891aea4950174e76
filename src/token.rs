use std::fmt;

use serde::{Deserialize, Serialize};

/// Which kind of rule produced a [`Token`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Rule {
    Digraph,
    Monograph,
    /// `f` between two vowels.
    Voiced,
    /// No rule matched so the letter is kept.
    PassThrough,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digraph => write!(f, "digraph"),
            Self::Monograph => write!(f, "monograph"),
            Self::Voiced => write!(f, "voiced"),
            Self::PassThrough => write!(f, "pass-through"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Token {
    /// The one or two letters that were read.
    pub source: String,
    pub sound: String,
    pub rule: Rule,
}

impl Token {
    #[must_use]
    pub fn new(source: &[char], sound: impl Into<String>, rule: Rule) -> Self {
        Self {
            source: source.iter().collect(),
            sound: sound.into(),
            rule,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.sound, self.rule)
    }
}
