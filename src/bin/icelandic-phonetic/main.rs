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

mod command_line;

use std::{fs, io, path::Path};

use clap::Parser;
use icelandic_phonetic::{batch, repl::Repl, utils};
use log::info;

use crate::command_line::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger(args.debug);

    if args.man {
        return Args::generate_man_page();
    }

    if let Some(path) = &args.file {
        return transliterate_file(path);
    }

    if !args.words.is_empty() {
        batch::write_words(&args.words, args.format, io::stdout().lock())?;
        return Ok(());
    }

    Repl::new(args.format).run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

fn transliterate_file(path: &Path) -> anyhow::Result<()> {
    let text = fs::read_to_string(path)?;
    let count = batch::write_word_list(&text, io::stdout().lock())?;
    info!("transliterated {count} words from {}", path.display());

    Ok(())
}
