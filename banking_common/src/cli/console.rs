//! The input/output boundary of a session
//!
//! Handlers talk to the operator only through [`Console`], so a session can run
//! against the terminal or against in-memory buffers in tests.

use std::fmt::Display;
use std::io::{self, stdin, stdout, BufRead, ErrorKind, StdinLock, Stdout, Write};

/// **A line-oriented prompt/response console**
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Binds a console to the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(stdin().lock(), stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// **Writes `label` and reads one line of response.**
    ///
    /// The line terminator is stripped; other whitespace is kept.
    /// Bytes that aren't valid UTF-8 are replaced with `U+FFFD`,
    /// so a garbled line reaches the caller as ordinary, unmatched text.
    ///
    /// # Errors
    /// - The input is exhausted, `ErrorKind::UnexpectedEof`;
    /// - Any underlying read or write failure.
    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(io::Error::new(
                ErrorKind::UnexpectedEof,
                "the input stream was closed",
            ));
        }

        let line = String::from_utf8_lossy(&bytes);

        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// Writes `message` followed by a newline.
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn prompt_writes_label_and_reads_a_line() {
        let mut console = console("first\r\nsecond\n");

        assert_eq!("first", console.prompt("A: ").unwrap());
        assert_eq!("second", console.prompt("B: ").unwrap());
        assert_eq!(b"A: B: ".to_vec(), console.into_output());
    }

    #[test]
    fn prompt_keeps_inner_and_leading_whitespace() {
        let mut console = console("  Rua A, 1 - Centro \n");

        assert_eq!("  Rua A, 1 - Centro ", console.prompt("").unwrap());
    }

    #[test]
    fn last_line_without_terminator_is_read() {
        let mut console = console("q");

        assert_eq!("q", console.prompt("").unwrap());
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let mut console = console("");

        let err = console.prompt("=> ").unwrap_err();
        assert_eq!(ErrorKind::UnexpectedEof, err.kind());
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let mut console = Console::new(Cursor::new(b"n\xffu\nq\n".to_vec()), Vec::new());

        assert_eq!("n\u{FFFD}u", console.prompt("").unwrap());
        assert_eq!("q", console.prompt("").unwrap());
    }

    #[test]
    fn say_appends_a_newline() {
        let mut console = console("");

        console.say("hello").unwrap();
        console.say(42).unwrap();
        assert_eq!(b"hello\n42\n".to_vec(), console.into_output());
    }
}
