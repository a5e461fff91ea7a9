//! Prompting and parsing of console input.
//!
//! Blank input always means "no value". Numeric parse failures name the
//! text that was typed.

use std::io::{BufRead, Write};
use std::str::FromStr;

use projects::{Decimal, Error as LibError};

use crate::error::CliError;

/// Returns the trimmed input, or `None` if it is blank.
pub fn parse_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Parses an optional number; `expected` names the kind for error messages.
pub fn parse_number<T: FromStr>(input: &str, expected: &str) -> Result<Option<T>, CliError> {
    let Some(text) = parse_text(input) else {
        return Ok(None);
    };
    text.parse().map(Some).map_err(|_| {
        CliError::Library(LibError::Parse {
            input: text,
            expected: expected.to_string(),
        })
    })
}

/// Parses an optional fixed-point decimal.
pub fn parse_decimal(input: &str) -> Result<Option<Decimal>, CliError> {
    parse_text(input)
        .map(|text| text.parse::<Decimal>())
        .transpose()
        .map_err(CliError::from)
}

/// Line-oriented prompts over any reader and writer.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the console, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes one line.
    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<(), CliError> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }

    /// Reads one raw line; `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prints `"{label}: "` and reads the answer.
    ///
    /// Returns `None` for a blank answer or end of input.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>, CliError> {
        write!(self.writer, "{label}: ")?;
        self.writer.flush()?;
        Ok(self.read_line()?.as_deref().and_then(parse_text))
    }

    /// Prompts for a value that must be present.
    pub fn prompt_required(&mut self, label: &str, field: &str) -> Result<String, CliError> {
        self.prompt(label)?
            .ok_or_else(|| CliError::InvalidInput(format!("A {field} is required.")))
    }

    /// Prompts for an optional integer.
    pub fn prompt_integer<T: FromStr>(&mut self, label: &str) -> Result<Option<T>, CliError> {
        let answer = self.prompt(label)?.unwrap_or_default();
        parse_number(&answer, "number")
    }

    /// Prompts for an optional decimal.
    pub fn prompt_decimal(&mut self, label: &str) -> Result<Option<Decimal>, CliError> {
        let answer = self.prompt(label)?.unwrap_or_default();
        parse_decimal(&answer)
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
    fn test_parse_text() {
        assert_eq!(parse_text("  deck \n"), Some("deck".to_string()));
        assert_eq!(parse_text("   \n"), None);
        assert_eq!(parse_text(""), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<i32>(" 3\n", "number").unwrap(), Some(3));
        assert_eq!(parse_number::<i32>("\n", "number").unwrap(), None);

        let err = parse_number::<i32>("three", "number").unwrap_err();
        assert_eq!(err.to_string(), "three is not a valid number");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(
            parse_decimal("12.5").unwrap().unwrap().to_string(),
            "12.50"
        );
        assert_eq!(parse_decimal(" ").unwrap(), None);

        let err = parse_decimal("lots").unwrap_err();
        assert!(err.to_string().starts_with("lots is not a valid"));
    }

    #[test]
    fn test_prompt_writes_label_and_trims() {
        let mut console = console("  Build deck  \n");
        let answer = console.prompt("Enter the project name").unwrap();
        assert_eq!(answer.as_deref(), Some("Build deck"));
        assert_eq!(
            String::from_utf8(console.into_writer()).unwrap(),
            "Enter the project name: "
        );
    }

    #[test]
    fn test_prompt_at_end_of_input() {
        let mut console = console("");
        assert_eq!(console.prompt("Anything").unwrap(), None);
        assert!(console.read_line().unwrap().is_none());
    }

    #[test]
    fn test_prompt_required() {
        let mut console = console("\n");
        let err = console
            .prompt_required("Enter the step text", "step")
            .unwrap_err();
        assert_eq!(err.to_string(), "A step is required.");
    }

    #[test]
    fn test_prompt_numbers() {
        let mut console = console("4\n\n7.125\n");
        assert_eq!(console.prompt_integer::<i32>("Difficulty").unwrap(), Some(4));
        assert_eq!(console.prompt_decimal("Hours").unwrap(), None);
        assert_eq!(
            console.prompt_decimal("Hours").unwrap().unwrap().to_string(),
            "7.13"
        );
    }
}
