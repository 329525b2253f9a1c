//! Style-class resolution: annotator tags to output elements.
//!
//! The annotator namespaces its tags (`fountain-scene-heading`) and may
//! mark a span as highlighted (`fountain-character-highlight`); both
//! decorations are stripped before lookup. The class-to-element mapping is
//! a data table, so adding a class is a new row, not new control flow in
//! the scanner.

/// Namespace prefix the annotator puts on every style tag.
const TAG_PREFIX: &str = "fountain-";

/// Suffix marking the highlighted variant of a tag. Informational only;
/// the base class decides the element.
const HIGHLIGHT_SUFFIX: &str = "-highlight";

/// Class assigned to untagged text.
pub const DEFAULT_CLASS: &str = "action";

/// How a resolved class renders: an element name, or nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSpec {
    /// Output element name. Empty for suppressed classes.
    pub tag: &'static str,
    /// Suppressed classes produce no output element.
    pub suppressed: bool,
}

impl ElementSpec {
    const fn element(tag: &'static str) -> Self {
        Self {
            tag,
            suppressed: false,
        }
    }

    const SUPPRESSED: Self = Self {
        tag: "",
        suppressed: true,
    };
}

/// Class → element table, first match wins. Classes not listed here (action,
/// dialog, trans, ...) fall back to a plain paragraph and keep their class
/// name as an attribute for stylesheets to target.
const CLASS_TABLE: &[(&str, ElementSpec)] = &[
    ("scene-heading", ElementSpec::element("h1")),
    ("character", ElementSpec::element("h2")),
    ("comment", ElementSpec::SUPPRESSED),
];

const FALLBACK: ElementSpec = ElementSpec::element("p");

/// Normalize a raw annotator tag to its bare class name.
///
/// Strips the highlight suffix, then the namespace prefix. An absent tag is
/// the default class.
pub fn normalize_tag(tag: Option<&str>) -> &str {
    let Some(tag) = tag else {
        return DEFAULT_CLASS;
    };
    let tag = tag.strip_suffix(HIGHLIGHT_SUFFIX).unwrap_or(tag);
    tag.strip_prefix(TAG_PREFIX).unwrap_or(tag)
}

/// Resolve a raw annotator tag to its bare class name and element spec.
pub fn resolve_class(tag: Option<&str>) -> (&str, ElementSpec) {
    let class = normalize_tag(tag);
    for (name, spec) in CLASS_TABLE {
        if *name == class {
            return (class, *spec);
        }
    }
    (class, FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_prefix() {
        assert_eq!(normalize_tag(Some("fountain-scene-heading")), "scene-heading");
    }

    #[test]
    fn test_normalize_strips_highlight_suffix() {
        assert_eq!(
            normalize_tag(Some("fountain-character-highlight")),
            "character"
        );
        // Suffix comes off before the prefix check, order matters for both
        assert_eq!(normalize_tag(Some("dialog-highlight")), "dialog");
    }

    #[test]
    fn test_normalize_absent_tag_is_action() {
        assert_eq!(normalize_tag(None), "action");
    }

    #[test]
    fn test_normalize_unprefixed_tag_passes_through() {
        assert_eq!(normalize_tag(Some("dialog")), "dialog");
    }

    #[test]
    fn test_resolve_table_entries() {
        let (class, spec) = resolve_class(Some("fountain-scene-heading"));
        assert_eq!((class, spec.tag, spec.suppressed), ("scene-heading", "h1", false));

        let (class, spec) = resolve_class(Some("fountain-character"));
        assert_eq!((class, spec.tag, spec.suppressed), ("character", "h2", false));

        let (_, spec) = resolve_class(Some("fountain-comment"));
        assert!(spec.suppressed);
    }

    #[test]
    fn test_resolve_fallback_keeps_class() {
        let (class, spec) = resolve_class(Some("fountain-dialog"));
        assert_eq!((class, spec.tag), ("dialog", "p"));

        let (class, spec) = resolve_class(None);
        assert_eq!((class, spec.tag), ("action", "p"));
    }

    #[test]
    fn test_highlighted_variant_resolves_like_base() {
        let (class, spec) = resolve_class(Some("fountain-scene-heading-highlight"));
        assert_eq!((class, spec.tag), ("scene-heading", "h1"));
    }
}
