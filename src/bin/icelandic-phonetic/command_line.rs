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

use std::{io::Write as _, path::PathBuf};

use clap::{CommandFactory, Parser};
use icelandic_phonetic::{COPYRIGHT, LONG_VERSION, format::OutputFormat};

/// Icelandic Pronunciation Approximator
///
/// Spells Icelandic words the way an English speaker would read them. With no
/// words and no file it reads one word per line from stdin.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Icelandic Pronunciation Approximator")]
pub(crate) struct Args {
    /// Words to transliterate, one result per line
    pub words: Vec<String>,

    /// Transliterate every line of a file in parallel
    #[arg(conflicts_with_all = ["words", "format"], long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// How to print each word: plain, explain, or ron
    #[arg(default_value_t = OutputFormat::Plain, long)]
    pub format: OutputFormat,

    /// Whether to log on the debug level
    #[arg(long)]
    pub debug: bool,

    /// Build the manpage
    #[arg(long)]
    pub man: bool,
}

impl Args {
    pub(crate) fn generate_man_page() -> anyhow::Result<()> {
        let mut buffer: Vec<u8> = Vec::default();
        let cmd = Self::command()
            .name("icelandic-phonetic")
            .long_version(None);
        let man = clap_mangen::Man::new(cmd).date("2026-10-18");

        man.render(&mut buffer)?;
        write!(buffer, "{COPYRIGHT}")?;

        std::fs::write("icelandic-phonetic.1", buffer)?;
        Ok(())
    }
}
