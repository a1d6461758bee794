//! Defines [`ArrowError`] for representing failures in this crate.
use std::fmt::{Debug, Display, Formatter};

use std::error::Error;

/// Errors returned by constructors and printers of this crate.
#[derive(Debug)]
pub enum ArrowError {
    /// Returned when functionality is not yet available.
    NotYetImplemented(String),
    /// Returned when a constructor receives arguments that do not fit together,
    /// e.g. a [`crate::datatypes::DataType`] that does not match the physical layout.
    InvalidArgumentError(String),
    /// Returned when buffers do not follow the arrow layout (e.g. decreasing offsets).
    OutOfSpec(String),
    /// Writing to a sink failed.
    Io(std::io::Error),
}

impl ArrowError {
    /// Creates a new [`ArrowError::OutOfSpec`].
    pub fn oos<A: Into<String>>(msg: A) -> Self {
        Self::OutOfSpec(msg.into())
    }

    /// Creates a new [`ArrowError::NotYetImplemented`].
    pub fn nyi<A: Into<String>>(msg: A) -> Self {
        Self::NotYetImplemented(msg.into())
    }
}

impl From<::std::io::Error> for ArrowError {
    fn from(error: std::io::Error) -> Self {
        ArrowError::Io(error)
    }
}

impl Display for ArrowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ArrowError::NotYetImplemented(source) => {
                write!(f, "Not yet implemented: {}", &source)
            }
            ArrowError::InvalidArgumentError(desc) => {
                write!(f, "Invalid argument error: {}", desc)
            }
            ArrowError::OutOfSpec(message) => {
                write!(f, "{}", message)
            }
            ArrowError::Io(desc) => write!(f, "Io error: {}", desc),
        }
    }
}

impl Error for ArrowError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ArrowError::Io(error) => Some(error),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArrowError>;
