//! Approximate English pronunciations of Icelandic words.
//!
//! Each word is read from left to right. Two letter combinations such as `ll`
//! are tried before single letters, and every sound is joined with a hyphen:
//!
//! ```ignore
//! use icelandic_phonetic::transliterate;
//!
//! assert_eq!(transliterate("Þingvellir"), "th-i-n-g-v-eh-tl-i-r");
//! ```
//!
//! The rules are a rough guide for English speakers, not a phonology of
//! Icelandic.

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

#![deny(clippy::panic)]

pub mod batch;
pub mod format;
pub mod repl;
pub mod rules;
pub mod token;
pub mod transliterator;
pub mod utils;

pub use transliterator::{Tokens, tokenize, transliterate, transliterate_all};

/// Goes between every sound.
pub const SEPARATOR: char = '-';

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2025-2026 David Lawrence Campbell

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2025 David Lawrence Campbell
Licensed under the AGPLv3"
);
