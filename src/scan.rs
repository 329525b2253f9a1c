//! Run scanning: splits an annotated script into paragraph-bounded,
//! single-style runs.
//!
//! A run is the unit the exporter works with: a maximal span of text that
//! shares one style tag and sits inside a single paragraph. Paragraphs are
//! delimited by blank lines (a newline, optional horizontal whitespace,
//! another newline); runs never cross them, so a style span straddling a
//! blank line yields one run per paragraph.

use std::ops::Range;

use memchr::memchr;

use crate::error::{Error, Result};
use crate::script::Script;

/// A maximal span of text sharing one style tag within a single paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Byte offset of the first character of the run.
    pub start: usize,
    /// Byte offset one past the last character of the run.
    pub end: usize,
    /// Raw annotator tag at the run's start, `None` for untagged text.
    pub tag: Option<String>,
}

impl Run {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The run's raw text slice.
    pub fn text<'a>(&self, script: &'a Script) -> &'a str {
        &script.text()[self.start..self.end]
    }
}

/// Find the next paragraph boundary at or after `from`, bounded by `end`.
///
/// Returns the byte position of the first newline of a blank line, or `end`
/// when the rest of the range is one paragraph.
pub(crate) fn paragraph_limit(text: &str, from: usize, end: usize) -> usize {
    let bytes = text.as_bytes();
    let mut at = from;
    while at < end {
        let Some(offset) = memchr(b'\n', &bytes[at..end]) else {
            return end;
        };
        let newline = at + offset;
        // Blank line: another newline after optional spaces/tabs. A CR is
        // skipped too so CRLF line endings separate paragraphs as well.
        let mut next = newline + 1;
        while next < end && (bytes[next] == b' ' || bytes[next] == b'\t' || bytes[next] == b'\r') {
            next += 1;
        }
        if next < end && bytes[next] == b'\n' {
            // Keep the CR of a CRLF terminator out of the last run.
            if newline > from && bytes[newline - 1] == b'\r' {
                return newline - 1;
            }
            return newline;
        }
        at = newline + 1;
    }
    end
}

/// Scan `range` of `script` into runs, in document order.
///
/// Each iteration skips inter-run whitespace, bounds the run by the next
/// paragraph boundary, and cuts it at the first style-tag change. Runs of
/// zero width are never emitted, and a run overlapping the range end is
/// truncated to it.
///
/// # Errors
///
/// [`Error::InputUnavailable`] for an empty script,
/// [`Error::MalformedRange`] for an invalid range, and
/// [`Error::NonProgressScan`] if the cursor fails to advance (an internal
/// defect, not an input condition).
pub fn scan_runs(script: &Script, range: Range<usize>) -> Result<Vec<Run>> {
    if script.is_empty() {
        return Err(Error::InputUnavailable);
    }
    script.check_range(range.start, range.end)?;

    let bytes = script.text().as_bytes();
    let mut runs = Vec::new();
    let mut cursor = range.start;

    while cursor < range.end {
        // Skip whitespace and blank lines between runs.
        while cursor < range.end && bytes[cursor].is_ascii_whitespace() {
            cursor += 1;
        }
        if cursor >= range.end {
            break;
        }

        let limit = paragraph_limit(script.text(), cursor, range.end);
        let boundary = script.next_tag_change(cursor, limit);
        if boundary <= cursor {
            return Err(Error::NonProgressScan { at: cursor });
        }

        runs.push(Run {
            start: cursor,
            end: boundary,
            tag: script.tag_at(cursor).map(str::to_owned),
        });
        cursor = boundary;
    }

    Ok(runs)
}
