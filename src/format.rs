use std::{fmt, str::FromStr};

use crate::transliterator::{tokenize, transliterate};

/// How a transliterated word gets printed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Plain,
    /// One line per token with the rule that produced it.
    Explain,
    Ron,
}

impl OutputFormat {
    /// # Errors
    ///
    /// If the tokens can't be serialized to RON.
    pub fn render(self, word: &str) -> ron::Result<String> {
        match self {
            Self::Plain => Ok(transliterate(word)),
            Self::Explain => Ok(tokenize(word)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
            Self::Ron => ron::ser::to_string(&tokenize(word)),
        }
    }

    #[must_use]
    pub fn is_multi_line(self) -> bool {
        self == Self::Explain
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Explain => write!(f, "explain"),
            Self::Ron => write!(f, "ron"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        let string = string.to_lowercase();

        match string.as_str() {
            "plain" => Ok(Self::Plain),
            "explain" => Ok(Self::Explain),
            "ron" => Ok(Self::Ron),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to an OutputFormat!"
            ))),
        }
    }
}
