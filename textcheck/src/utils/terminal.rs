//! # Terminal Input Helper
//!
//! Prompts until the answer passes every [`Sanitize`] filter.
//!
//! ## Example
//! ```rust,no_run
//! use textcheck::format::FormatKind;
//! use textcheck::utils::{Sanitize, Terminal};
//!
//! let input = Terminal::ask(
//!     "Customer email:",
//!     &[Sanitize::MaxLength(254), Sanitize::Format(FormatKind::Email)],
//! )
//! .unwrap();
//!
//! println!("The input: {}", input.answer);
//! ```
use crate::utils::sanitize::Sanitize;
use std::io::{self, BufRead, Write};

/// An accepted answer. Internally calls [`Sanitize::execute`].
pub struct Terminal {
    pub answer: String,
}

impl Terminal {
    /// Asks on stdout, reads from stdin.
    pub fn ask(question: &str, filters: &[Sanitize]) -> io::Result<Terminal> {
        let stdin = io::stdin();
        Terminal::ask_with(&mut stdin.lock(), &mut io::stdout(), question, filters)
    }

    /// Writes `question`, reads one line and retries until it passes.
    ///
    /// Rejections are written back to `output`. Returns
    /// [`io::ErrorKind::UnexpectedEof`] when `input` runs dry first.
    pub fn ask_with<R: BufRead, W: Write>(
        input: &mut R,
        output: &mut W,
        question: &str,
        filters: &[Sanitize],
    ) -> io::Result<Terminal> {
        let answer: String = loop {
            writeln!(output, "{}", question)?;
            output.flush()?;

            let mut answer = String::new();
            if input.read_line(&mut answer)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a valid answer",
                ));
            }

            match Sanitize::execute(answer.as_str(), filters) {
                Ok(data) => break data,
                Err(e) => writeln!(output, "{}", e)?,
            }
        };

        Ok(Terminal { answer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::ClassRule;
    use std::io::Cursor;

    #[test]
    fn test_terminal_retries_until_valid() {
        let mut input = Cursor::new("08-11\n0811\n08119889788\n");
        let mut output = Vec::new();
        let filters = [Sanitize::Class(ClassRule::Numeric), Sanitize::MaxLength(15)];

        let got = Terminal::ask_with(&mut input, &mut output, "Phone?", &filters).unwrap();
        assert_eq!(got.answer, "0811");

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Phone?").count(), 2);
        assert!(printed.contains("The value must contain digits only, try again!"));
    }

    #[test]
    fn test_terminal_eof_is_error() {
        let mut input = Cursor::new("abc\n");
        let mut output = Vec::new();
        let filters = [Sanitize::Class(ClassRule::Numeric)];

        let err = Terminal::ask_with(&mut input, &mut output, "Digits?", &filters)
            .err()
            .unwrap();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
