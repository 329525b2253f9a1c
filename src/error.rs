//! Error types for slugline operations.

use thiserror::Error;

/// Errors that can occur while scanning or exporting an annotated script.
#[derive(Error, Debug)]
pub enum Error {
    /// The script has no text to scan over the requested range.
    #[error("no readable input: script is empty")]
    InputUnavailable,

    /// The requested range is inverted, out of bounds, or splits a
    /// multi-byte character.
    #[error("malformed range {start}..{end} for a script of {len} bytes")]
    MalformedRange {
        start: usize,
        end: usize,
        len: usize,
    },

    /// An annotator span is inverted, out of bounds, overlaps its
    /// neighbor, or splits a multi-byte character.
    #[error("malformed span {start}..{end} for a script of {len} bytes")]
    MalformedSpan {
        start: usize,
        end: usize,
        len: usize,
    },

    /// The run scanner failed to advance its cursor. This is an internal
    /// invariant violation, never a recoverable input condition.
    #[error("run scanner stalled at byte {at}")]
    NonProgressScan { at: usize },

    /// A `${` placeholder opener with no closing `}` in the template.
    #[error("unterminated placeholder at byte {at} of template")]
    MalformedTemplate { at: usize },

    /// The export was aborted via its cancellation flag.
    #[error("export cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, Error>;
