//! Sequence error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during indexed sequence access.
///
/// A slot whose referent has been reclaimed is not an error: reads report
/// it as `None`. The only failure is a caller handing in an index that does
/// not name a slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// The index is not in `0..len`.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of slots in the sequence at the time of the call.
        len: usize,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(
                    f,
                    "index out of range: index {index}, sequence length {len}"
                )
            }
        }
    }
}

impl Error for SequenceError {}
