//! Utilities for game engine error handling.

use std::error::Error as StdError;
use std::fmt;

/// Result of any operation which can return an error.
pub type Result<T> = std::result::Result<T, DError>;

/// General error type of game engine.
///
/// Contains general message and source of error, if any.
///
#[derive(Debug)]
pub struct DError {
    message: String,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl DError {
    /// Creates new error with specified message and source of error.
    pub fn new<T, E>(message: T, source: E) -> Self
    where
        T: ToString,
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: message.to_string(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)?;
        match &self.source {
            Some(source) => write!(f, " ({})", source),
            None => Ok(()),
        }
    }
}

impl StdError for DError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|err| err.as_ref() as _)
    }
}

impl From<&str> for DError {
    fn from(message: &str) -> Self {
        Self::from(message.to_string())
    }
}

impl From<String> for DError {
    fn from(message: String) -> Self {
        Self {
            message,
            source: None,
        }
    }
}
