//! Error types for control-file emission.

use std::fmt;
use std::io;

/// Errors that can occur while emitting a control file.
#[derive(Debug)]
pub enum EmitError {
    /// An I/O error from the underlying sink.
    Io(io::Error),
    /// The field's control-point count disagrees with the header's
    /// declared count. The file would be internally inconsistent, so
    /// nothing is written.
    FieldCountMismatch {
        /// Count declared in the plan header.
        declared: usize,
        /// Count found in the assembled field.
        found: usize,
    },
    /// The field has no leaf pairs to emit.
    EmptyField,
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::FieldCountMismatch { declared, found } => write!(
                f,
                "header declares {declared} control points, field has {found}"
            ),
            Self::EmptyField => write!(f, "field has no leaf pairs"),
        }
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for EmitError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
