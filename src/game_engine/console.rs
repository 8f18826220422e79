//! Line-oriented terminal I/O.
//!
//! Generic over the reader and writer so a session can run against
//! stdin/stdout or against in-memory buffers.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::game_engine::error::GameError;

pub struct Console<R, W> {
    input: R,
    output: W,
    pause: Duration,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(pause: Duration) -> Self {
        Console::new(io::stdin().lock(), io::stdout(), pause)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, pause: Duration) -> Self {
        Console { input, output, pause }
    }

    /// Write one line.
    pub fn say(&mut self, line: impl Display) -> Result<(), GameError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<(), GameError> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Write `text` without a newline, then read the reply.
    pub fn ask(&mut self, text: &str) -> Result<String, GameError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line, without its terminator.
    ///
    /// End of input is [`GameError::InputClosed`]. Bytes that are not
    /// UTF-8 decode to U+FFFD, so malformed input reaches the answer parsers.
    pub fn read_line(&mut self) -> Result<String, GameError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(GameError::InputClosed);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Readability pause between interactions.
    pub fn pause(&mut self) -> Result<(), GameError> {
        self.output.flush()?;
        if !self.pause.is_zero() {
            thread::sleep(self.pause);
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
