//! Annotated script model.
//!
//! A [`Script`] is plain screenplay text plus the per-span style
//! classification an external annotator has already computed for it. The
//! annotation is a step function over byte positions: constant on each
//! [`StyleSpan`], absent between spans. The model is immutable once built;
//! conversion never writes back into it.
//!
//! How the annotator stores its results (per-character array, interval
//! tree, ...) is its own business. This crate only needs the step function,
//! so spans are the interchange form: sorted, non-overlapping byte ranges
//! on `char` boundaries.

use crate::error::{Error, Result};

/// A half-open byte range `[start, end)` sharing one style tag.
///
/// Tags are whatever the annotator emits, e.g. `fountain-scene-heading` or
/// `fountain-character-highlight`. They are compared by exact string
/// equality; normalization happens at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleSpan {
    pub start: usize,
    pub end: usize,
    pub tag: String,
}

impl StyleSpan {
    /// Create a span covering `[start, end)` with the given tag.
    pub fn new(start: usize, end: usize, tag: impl Into<String>) -> Self {
        Self {
            start,
            end,
            tag: tag.into(),
        }
    }
}

/// An annotated screenplay document: text, style spans, and an optional
/// source name used to derive output file names.
#[derive(Debug, Clone, Default)]
pub struct Script {
    text: String,
    spans: Vec<StyleSpan>,
    name: Option<String>,
}

impl Script {
    /// Create a script with no annotation (all text untagged).
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
            name: None,
        }
    }

    /// Create a script from text and annotator spans.
    ///
    /// Spans are sorted by start position. The annotator's output is not
    /// trusted: a span that is inverted, runs past the text, overlaps its
    /// neighbor, or cuts a multi-byte character is rejected as
    /// [`Error::MalformedSpan`] here, before any scanning begins.
    pub fn with_spans(text: impl Into<String>, mut spans: Vec<StyleSpan>) -> Result<Self> {
        let text = text.into();
        spans.sort_by_key(|s| s.start);

        let mut prev_end = 0;
        for span in &spans {
            if span.start > span.end
                || span.end > text.len()
                || span.start < prev_end
                || !text.is_char_boundary(span.start)
                || !text.is_char_boundary(span.end)
            {
                return Err(Error::MalformedSpan {
                    start: span.start,
                    end: span.end,
                    len: text.len(),
                });
            }
            prev_end = span.end;
        }

        Ok(Self {
            text,
            spans,
            name: None,
        })
    }

    /// Attach a source file name (e.g. `"big-fish.fountain"`).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[StyleSpan] {
        &self.spans
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Source name with its final extension stripped, if the script is named.
    ///
    /// `"big-fish.fountain"` becomes `"big-fish"`; a name without a dot is
    /// returned unchanged.
    pub fn base_name(&self) -> Option<&str> {
        let name = self.name()?;
        match name.rsplit_once('.') {
            Some((base, _)) if !base.is_empty() => Some(base),
            _ => Some(name),
        }
    }

    /// Style tag in effect at byte position `pos`, if any.
    pub fn tag_at(&self, pos: usize) -> Option<&str> {
        // First span that ends after pos; it covers pos iff it also starts
        // at or before it.
        let i = self.spans.partition_point(|s| s.end <= pos);
        match self.spans.get(i) {
            Some(span) if span.start <= pos => Some(&span.tag),
            _ => None,
        }
    }

    /// First position strictly after `pos`, bounded by `limit`, where the
    /// style tag differs from the tag at `pos`. Returns `limit` when the
    /// tag is constant over `(pos, limit)`.
    pub(crate) fn next_tag_change(&self, pos: usize, limit: usize) -> usize {
        let current = self.tag_at(pos);
        let i = self.spans.partition_point(|s| s.end <= pos);
        // The step function can only change at span edges.
        for span in &self.spans[i..] {
            if span.start >= limit {
                break;
            }
            for edge in [span.start, span.end] {
                if edge > pos && edge < limit && self.tag_at(edge) != current {
                    return edge;
                }
            }
        }
        limit
    }

    /// Validate a requested scan range against the text extent.
    pub(crate) fn check_range(&self, start: usize, end: usize) -> Result<()> {
        let len = self.text.len();
        if start > end
            || end > len
            || !self.text.is_char_boundary(start)
            || !self.text.is_char_boundary(end)
        {
            return Err(Error::MalformedRange { start, end, len });
        }
        Ok(())
    }
}
