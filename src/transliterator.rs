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

use log::trace;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::{
    SEPARATOR,
    rules::{VOICED_F, digraph, is_vowel, monograph},
    token::{Rule, Token},
};

/// Converts an Icelandic word into an English readable approximation, for
/// example `þingvellir` becomes `th-i-n-g-v-eh-tl-i-r`.
///
/// The word is trimmed and lowercased first. Whitespace alone gives an empty
/// string.
#[must_use]
pub fn transliterate(word: &str) -> String {
    let mut result = String::new();

    for (i, token) in Tokens::new(word).enumerate() {
        if i > 0 {
            result.push(SEPARATOR);
        }
        result.push_str(&token.sound);
    }

    result
}

#[must_use]
pub fn tokenize(word: &str) -> Vec<Token> {
    Tokens::new(word).collect()
}

/// Transliterates every word in parallel, keeping the input order.
#[must_use]
pub fn transliterate_all<S: AsRef<str> + Sync>(words: &[S]) -> Vec<String> {
    words
        .par_iter()
        .map(|word| transliterate(word.as_ref()))
        .collect()
}

/// The tokens of one word, from left to right.
#[derive(Clone, Debug)]
pub struct Tokens {
    letters: Vec<char>,
    index: usize,
}

impl Tokens {
    #[must_use]
    pub fn new(word: &str) -> Self {
        Self {
            letters: word.trim().to_lowercase().chars().collect(),
            index: 0,
        }
    }

    fn flanked_by_vowels(&self, i: usize) -> bool {
        i > 0
            && i + 1 < self.letters.len()
            && is_vowel(self.letters[i - 1])
            && is_vowel(self.letters[i + 1])
    }
}

impl Iterator for Tokens {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.index;
        let letters = &self.letters;

        if i >= letters.len() {
            return None;
        }

        if i + 1 < letters.len()
            && let Some(sound) = digraph([letters[i], letters[i + 1]])
        {
            let token = Token::new(&letters[i..i + 2], sound, Rule::Digraph);
            trace!("{token}");
            self.index += 2;
            return Some(token);
        }

        let letter = letters[i];
        let source = &letters[i..=i];

        let token = if letter == 'f' && self.flanked_by_vowels(i) {
            Token::new(source, VOICED_F, Rule::Voiced)
        } else if let Some(sound) = monograph(letter) {
            Token::new(source, sound, Rule::Monograph)
        } else {
            Token::new(source, letter, Rule::PassThrough)
        };

        trace!("{token}");
        self.index += 1;
        Some(token)
    }
}
