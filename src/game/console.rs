//! Line-based console used for every prompt and every line of narration.

use super::errors::{GameError, Result};
use crate::logutil::escape_log;
use std::io::{BufRead, Write};

pub trait Console {
    /// Print one line.
    fn say(&mut self, line: &str) -> Result<()>;

    /// Print `prompt` without a newline, then read one line with its terminator stripped.
    /// Returns [`GameError::InputClosed`] at end of input.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Print an empty line followed by `line`.
    fn say_after_gap(&mut self, line: &str) -> Result<()> {
        self.say("")?;
        self.say(line)
    }
}

/// Normalize a typed command or choice for matching. Only case is folded; stray
/// whitespace makes the input a miss.
pub fn normalize(input: &str) -> String {
    input.to_lowercase()
}

/// [`Console`] over any buffered reader and writer (stdin/stdout in the binary,
/// `Cursor`/`Vec<u8>` in tests).
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LineConsole { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(GameError::InputClosed);
        }
        // Undecodable bytes become U+FFFD and simply fail to match
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        log::trace!("input <- '{}'", escape_log(&line));
        Ok(line)
    }
}
