//! [`Io`] over any buffered reader and writer.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use super::Io;

/// Console I/O: prompts go to `writer`, answers come from `reader`.
///
/// The production machine uses stdin and stdout; tests drive it with an
/// in-memory script and capture the transcript.
pub struct ConsoleIo<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleIo<StdinLock<'static>, Stdout> {
    /// Console I/O on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the console, returning the writer (e.g. to inspect output).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Io for ConsoleIo<R, W> {
    fn println(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{message}")
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }
}
