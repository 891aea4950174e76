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

//! The fixed pronunciation rules.
//!
//! Two letter combinations are always tried before single letters. The letters
//! are expected to already be lowercase.

/// What `f` sounds like when it sits between two vowels.
pub const VOICED_F: &str = "v";

/// Every two letter combination with its own sound.
pub const DIGRAPHS: [([char; 2], &str); 8] = [
    (['a', 'u'], "oy"),
    (['e', 'y'], "ay"),
    (['e', 'i'], "ay"),
    (['h', 'v'], "kv"),
    // A famous Icelandic sound.
    (['l', 'l'], "tl"),
    (['f', 'n'], "pn"),
    (['r', 'l'], "rtl"),
    (['r', 'n'], "rtn"),
];

#[must_use]
pub fn digraph(pair: [char; 2]) -> Option<&'static str> {
    DIGRAPHS
        .iter()
        .find(|(letters, _)| *letters == pair)
        .map(|(_, sound)| *sound)
}

/// The sound of a single letter, ignoring its neighbors.
///
/// Letters without a rule return `None` and are written as they are.
#[must_use]
pub fn monograph(letter: char) -> Option<&'static str> {
    let sound = match letter {
        'á' => "ow",
        'é' => "yeh",
        'í' | 'ý' => "ee",
        'ó' => "oh",
        'ú' => "oo",
        'æ' => "eye",
        'ö' => "ur",
        // Thorn is unvoiced like "thin" and eth is voiced like "the", but
        // English spells both the same way.
        'þ' | 'ð' => "th",
        'j' => "y",
        // Always hard, even where Icelandic softens it.
        'g' => "g",
        'f' => "f",
        'a' => "a",
        'e' => "eh",
        'i' | 'y' => "i",
        'o' => "o",
        'u' => "uh",
        _ => return None,
    };

    Some(sound)
}

/// Only used to decide whether `f` is voiced.
#[must_use]
pub fn is_vowel(letter: char) -> bool {
    matches!(
        letter,
        'a' | 'á' | 'e' | 'é' | 'i' | 'í' | 'ó' | 'ú' | 'ü' | 'y' | 'ý' | 'æ' | 'ö'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digraphs() {
        assert_eq!(digraph(['a', 'u']), Some("oy"));
        assert_eq!(digraph(['e', 'i']), Some("ay"));
        assert_eq!(digraph(['r', 'n']), Some("rtn"));
        assert_eq!(digraph(['a', 'a']), None);
    }

    #[test]
    fn digraphs_are_ordered() {
        assert_eq!(digraph(['u', 'a']), None);
        assert_eq!(digraph(['v', 'h']), None);
        assert_eq!(digraph(['n', 'f']), None);
    }

    #[test]
    fn accented_letters_keep_their_own_sounds() {
        assert_eq!(monograph('a'), Some("a"));
        assert_eq!(monograph('á'), Some("ow"));
        assert_eq!(monograph('e'), Some("eh"));
        assert_eq!(monograph('é'), Some("yeh"));
        assert_eq!(monograph('ö'), Some("ur"));
    }

    #[test]
    fn plain_consonants_have_no_rule() {
        for letter in ['b', 'd', 'h', 'k', 'l', 'n', 'r', 's', 'v'] {
            assert_eq!(monograph(letter), None);
        }
    }

    #[test]
    fn vowels() {
        for letter in "aáeéiíóúüyýæö".chars() {
            assert!(is_vowel(letter), "{letter}");
        }

        // Plain o and u do not count.
        assert!(!is_vowel('o'));
        assert!(!is_vowel('u'));
        assert!(!is_vowel('f'));
        assert!(!is_vowel('A'));
    }
}
