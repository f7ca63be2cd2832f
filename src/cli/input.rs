//! Move input parsing for interactive play.

use std::io::{self, Write};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static COLUMN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([1-7])$").expect("COLUMN_RE regex should be valid"));
static QUIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(?i)(q|quit|exit)$").expect("QUIT_RE regex should be valid"));

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input {input:?}; enter a column from 1 to 7, or q to quit")]
    InvalidInput { input: String },
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveInput {
    /// Zero-based column.
    Column { column: usize },
    Quit,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if let Some(caps) = COLUMN_RE.captures(trimmed) {
            let column = caps[1]
                .parse::<usize>()
                .map_err(|_| InputError::InvalidInput {
                    input: input.to_string(),
                })?;
            return Ok(MoveInput::Column { column: column - 1 });
        }

        if QUIT_RE.is_match(trimmed) {
            return Ok(MoveInput::Quit);
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

/// Prompts on stdout and reads one move from stdin. End of input counts as
/// quitting.
pub fn read_move_input(prompt: &str) -> Result<MoveInput, InputError> {
    print!("{}", prompt);
    io::stdout().flush().map_err(|e| InputError::IOError {
        error: format!("Failed to flush stdout: {}", e),
    })?;

    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .map_err(|e| InputError::IOError {
            error: format!("Failed to read stdin: {}", e),
        })?;
    if read == 0 {
        return Ok(MoveInput::Quit);
    }

    line.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_columns() {
        assert_eq!(Ok(MoveInput::Column { column: 0 }), "1".parse());
        assert_eq!(Ok(MoveInput::Column { column: 6 }), " 7\n".parse());
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(Ok(MoveInput::Quit), "q".parse());
        assert_eq!(Ok(MoveInput::Quit), "Quit".parse());
        assert_eq!(Ok(MoveInput::Quit), "exit\n".parse());
    }

    #[test]
    fn test_rejects_other_input() {
        for input in ["0", "8", "12", "", "three", "1 2"] {
            assert!(
                matches!(
                    input.parse::<MoveInput>(),
                    Err(InputError::InvalidInput { .. })
                ),
                "{:?} should be rejected",
                input
            );
        }
    }
}
