//! # slugline
//!
//! Converts an annotated screenplay — plain text plus the per-span style
//! classification an external annotator has already computed — into a
//! semantic HTML document. Paragraph structure is preserved, comment spans
//! are dropped, and everything else becomes one element per run with its
//! style class kept as an attribute.
//!
//! The conversion is a pure, synchronous transform over in-memory data:
//! no I/O, no suspension points, no shared state. Concurrent exports of
//! different scripts need no coordination.
//!
//! ## Quick Start
//!
//! ```
//! use slugline::{HtmlExporter, Script, StyleSpan};
//!
//! let script = Script::with_spans(
//!     "INT. ROOM\n\nA man enters.\n\nJOHN",
//!     vec![
//!         StyleSpan::new(0, 9, "fountain-scene-heading"),
//!         StyleSpan::new(26, 30, "fountain-character"),
//!     ],
//! )
//! .unwrap()
//! .with_name("scene.fountain");
//!
//! let html = HtmlExporter::new().export(&script).unwrap();
//!
//! assert!(html.contains("<h1 class=\"scene-heading\">INT. ROOM</h1>"));
//! assert!(html.contains("<p class=\"action\">A man enters.</p>"));
//! assert!(html.contains("<h2 class=\"character\">JOHN</h2>"));
//! ```
//!
//! ## Pieces
//!
//! - [`Script`]: text + style-span step function + optional source name.
//! - [`scan_runs`]: paragraph-bounded, single-style [`Run`]s in document
//!   order.
//! - [`resolve_class`]: annotator tag → bare class name + output element.
//! - [`build_element`] / [`escape_html`]: one run → one escaped element.
//! - [`render_template`]: `${key}` substitution for the document head.
//! - [`HtmlExporter`]: the whole pipeline, configured via [`ExportConfig`].

pub mod error;
pub mod export;
pub mod scan;
pub mod script;
pub mod style;

pub use error::{Error, Result};
pub use export::{
    DEFAULT_HEAD_TEMPLATE, ExportConfig, HtmlExporter, build_element, escape_attr, escape_html,
    render_template,
};
pub use scan::{Run, scan_runs};
pub use script::{Script, StyleSpan};
pub use style::{DEFAULT_CLASS, ElementSpec, normalize_tag, resolve_class};
