// This file is part of icelandic-phonetic.
//
// icelandic-phonetic is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// icelandic-phonetic is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::io::{self, Write};

use log::debug;
use thiserror::Error;

use crate::{format::OutputFormat, transliterator::transliterate_all};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Error writing output: {0}")]
    Write(#[from] io::Error),
    #[error("Error rendering output: {0}")]
    Render(#[from] ron::Error),
}

/// Writes one rendered word per line.
///
/// # Errors
///
/// If a word can't be rendered or written.
pub fn write_words<S: AsRef<str>, W: Write>(
    words: &[S],
    format: OutputFormat,
    mut writer: W,
) -> Result<(), BatchError> {
    for word in words {
        writeln!(writer, "{}", format.render(word.as_ref())?)?;
    }

    Ok(())
}

/// Every line of `text` that isn't blank.
#[must_use]
pub fn word_list(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.trim().is_empty()).collect()
}

/// Transliterates the word list in parallel and writes `word: result` lines in
/// the same order. Returns how many words were written.
///
/// # Errors
///
/// If writing fails.
pub fn write_word_list<W: Write>(text: &str, mut writer: W) -> io::Result<usize> {
    let words = word_list(text);
    debug!("{} words", words.len());

    for (word, phonetic) in words.iter().zip(transliterate_all(&words)) {
        writeln!(writer, "{word}: {phonetic}")?;
    }

    Ok(words.len())
}
