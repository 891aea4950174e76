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

use std::io::{self, BufRead, Write};

use log::debug;
use thiserror::Error;

use crate::format::OutputFormat;

pub const BANNER: &str = "Icelandic Pronunciation Approximator";
pub const INSTRUCTIONS: &str = "Enter an Icelandic word (or 'exit' to quit):";
pub const PROMPT: &str = "> ";
pub const LABEL: &str = "English approximation:";
/// "Bye bye!" in Icelandic.
pub const FAREWELL: &str = "Bless bless!";
const EXIT: &str = "exit";

#[derive(Error, Debug)]
pub enum ReplError {
    #[error("Error reading input: {0}")]
    Read(io::Error),
    #[error("Error writing output: {0}")]
    Write(io::Error),
    #[error("Error rendering output: {0}")]
    Render(#[from] ron::Error),
}

/// Reads one word per line and prints how to say it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Repl {
    pub format: OutputFormat,
}

impl Repl {
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Runs until the input ends or someone types `exit`.
    ///
    /// # Errors
    ///
    /// If reading a line, writing to `writer`, or rendering a word fails.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<(), ReplError> {
        writeln!(writer, "{BANNER}").map_err(ReplError::Write)?;
        writeln!(writer, "{INSTRUCTIONS}").map_err(ReplError::Write)?;

        let mut buffer = String::new();
        loop {
            write!(writer, "{PROMPT}").map_err(ReplError::Write)?;
            writer.flush().map_err(ReplError::Write)?;

            buffer.clear();
            if reader.read_line(&mut buffer).map_err(ReplError::Read)? == 0 {
                debug!("end of input");
                return Ok(());
            }

            let line = buffer
                .strip_suffix('\n')
                .map_or(buffer.as_str(), |line| line.strip_suffix('\r').unwrap_or(line));

            if line.to_lowercase() == EXIT {
                writeln!(writer, "{FAREWELL}").map_err(ReplError::Write)?;
                return Ok(());
            }

            if line.is_empty() {
                continue;
            }

            debug!("word: {line:?}");
            let rendered = self.format.render(line)?;

            if self.format.is_multi_line() {
                writeln!(writer, "{LABEL}\n{rendered}\n").map_err(ReplError::Write)?;
            } else {
                writeln!(writer, "{LABEL} {rendered}\n").map_err(ReplError::Write)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor, Read};

    use crate::{token::Token, transliterator::tokenize};

    use super::*;

    fn run(format: OutputFormat, input: &str) -> String {
        let mut output = Vec::new();
        let result = Repl::new(format).run(Cursor::new(input), &mut output);

        assert!(result.is_ok());
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn words_then_exit() {
        let output = run(OutputFormat::Plain, "afa\n\nEXIT\nþingvellir\n");

        assert_eq!(
            output,
            "Icelandic Pronunciation Approximator\n\
             Enter an Icelandic word (or 'exit' to quit):\n\
             > English approximation: a-v-a\n\n\
             > > Bless bless!\n"
        );
    }

    #[test]
    fn end_of_input() {
        let output = run(OutputFormat::Plain, "Þór\r\n");

        assert!(output.ends_with("> English approximation: th-oh-r\n\n> "));
        assert!(!output.contains(FAREWELL));
    }

    #[test]
    fn exit_is_not_trimmed() {
        let output = run(OutputFormat::Plain, " exit\nExit\n");

        assert!(output.contains("> English approximation: eh-x-i-t\n\n> Bless bless!\n"));
    }

    #[test]
    fn whitespace_line_prints_an_empty_result() {
        let output = run(OutputFormat::Plain, "   \n");

        assert!(output.contains("> English approximation: \n\n"));
    }

    #[test]
    fn explain() {
        let output = run(OutputFormat::Explain, "au\nexit\n");

        assert!(output.contains("> English approximation:\nau -> oy (digraph)\n\n> "));
    }

    #[test]
    fn ron() -> anyhow::Result<()> {
        let output = run(OutputFormat::Ron, "karl\nexit\n");

        let start = output.find(LABEL).map_or(0, |i| i + LABEL.len() + 1);
        let line = output[start..].lines().next().unwrap_or_default();
        let tokens: Vec<Token> = ron::from_str(line)?;

        assert_eq!(tokens, tokenize("karl"));
        assert!(output.contains(&format!("{line}\n\n> Bless bless!\n")));
        Ok(())
    }

    struct Full;

    impl Write for Full {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_error() {
        let error = Repl::default().run(Cursor::new("afa\n"), Full).err();

        assert!(matches!(error, Some(ReplError::Write(_))));
        assert_eq!(
            error.map(|error| error.to_string()),
            Some("Error writing output: disk full".to_string())
        );
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("broken pipe"))
        }
    }

    #[test]
    fn read_error() {
        let mut output = Vec::new();
        let result = Repl::default().run(BufReader::new(Broken), &mut output);

        let error = result.err();
        assert!(matches!(error, Some(ReplError::Read(_))));
        assert_eq!(
            error.map(|error| error.to_string()),
            Some("Error reading input: broken pipe".to_string())
        );
        assert!(String::from_utf8(output).unwrap().ends_with(PROMPT));
    }
}
