//! Errors raised by address book commands
//!
//! Every variant is recoverable: the dispatcher turns each one into a fixed
//! reply and the session carries on.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A date (or day count) did not match the expected format
    #[error("Invalid date format: {0}")]
    Format(String),

    /// The command was called with the wrong number of arguments
    #[error("Command '{command}' expects {expected} argument(s), got {got}")]
    MissingArgument {
        command: String,
        expected: usize,
        got: usize,
    },

    /// No record with this name exists
    #[error("Contact not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, ContactError>;
