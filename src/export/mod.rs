//! HTML export pipeline.
//!
//! [`HtmlExporter`] ties the pieces together: it renders the head template,
//! opens the screenplay container, emits one element per scanned run in
//! document order, and closes the document. The transform is pure — the
//! same script and range always produce the same output, and the script is
//! never mutated.
//!
//! # Example
//!
//! ```
//! use slugline::{HtmlExporter, Script, StyleSpan};
//!
//! let script = Script::with_spans(
//!     "INT. ROOM\n\nA man enters.",
//!     vec![StyleSpan::new(0, 9, "fountain-scene-heading")],
//! )
//! .unwrap();
//! let html = HtmlExporter::new().export(&script).unwrap();
//!
//! assert!(html.contains("<h1 class=\"scene-heading\">INT. ROOM</h1>"));
//! assert!(html.contains("<p class=\"action\">A man enters.</p>"));
//! ```

use std::collections::HashMap;
use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Error, Result};
use crate::scan::scan_runs;
use crate::script::Script;

mod element;
mod escape;
mod template;

pub use element::build_element;
pub use escape::{escape_attr, escape_html};
pub use template::render_template;

/// Head template used when the configuration doesn't supply one.
///
/// Recognized placeholders: `tool-version`, `host-version`, `htmlfile`,
/// `cssfile`. Unrecognized placeholders pass through untouched.
pub const DEFAULT_HEAD_TEMPLATE: &str = "\
<!DOCTYPE html>
<html>
<head>
<meta charset=\"utf-8\">
<!-- ${htmlfile} generated by slugline ${tool-version} (${host-version}) -->
<title>${htmlfile}</title>
<link rel=\"stylesheet\" type=\"text/css\" href=\"${cssfile}\">
</head>
<body>
";

/// Base name used for scripts that have no source name.
pub const DEFAULT_DOCUMENT_NAME: &str = "untitled";

/// Configuration for HTML export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Head template rendered before the screenplay container.
    pub head_template: String,
    /// Base name for output files when the script is unnamed.
    pub default_document_name: String,
    /// Host application version reported in the head when this library is
    /// embedded; `"standalone"` otherwise.
    pub host_version: String,
    /// Font stack written into the companion stylesheet.
    pub font_family: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            head_template: DEFAULT_HEAD_TEMPLATE.to_string(),
            default_document_name: DEFAULT_DOCUMENT_NAME.to_string(),
            host_version: "standalone".to_string(),
            font_family: "\"Courier Prime\", \"Courier New\", Courier, monospace".to_string(),
        }
    }
}

/// Exporter for HTML output.
///
/// Follows the builder pattern: `new()` for defaults, `with_config()` to
/// customize, then `export()` or `export_range()`.
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter {
    config: ExportConfig,
}

impl HtmlExporter {
    /// Create an exporter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter with the specified configuration.
    pub fn with_config(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Export the whole script as a complete HTML document.
    pub fn export(&self, script: &Script) -> Result<String> {
        self.export_range(script, 0..script.len())
    }

    /// Export `range` of the script as a complete HTML document.
    pub fn export_range(&self, script: &Script, range: Range<usize>) -> Result<String> {
        self.render(script, range, None)
    }

    /// Like [`export_range`](Self::export_range), but checks `cancel`
    /// between runs and aborts with [`Error::Cancelled`] once it is set.
    /// Nothing partial is returned on abort.
    pub fn export_with_cancel(
        &self,
        script: &Script,
        range: Range<usize>,
        cancel: &AtomicBool,
    ) -> Result<String> {
        self.render(script, range, Some(cancel))
    }

    fn render(
        &self,
        script: &Script,
        range: Range<usize>,
        cancel: Option<&AtomicBool>,
    ) -> Result<String> {
        let runs = scan_runs(script, range)?;
        let head = render_template(&self.config.head_template, &self.head_bindings(script))?;

        let mut out = String::with_capacity(head.len() + script.len() + script.len() / 4);
        out.push_str(&head);
        out.push_str("<div class=\"screenplay\">\n");
        for run in &runs {
            if let Some(flag) = cancel
                && flag.load(Ordering::Relaxed)
            {
                return Err(Error::Cancelled);
            }
            if let Some(element) = build_element(script, run) {
                out.push_str(&element);
            }
        }
        out.push_str("</div>\n</body>\n</html>\n");
        Ok(out)
    }

    /// Placeholder bindings used to render the head template.
    pub fn head_bindings(&self, script: &Script) -> HashMap<String, String> {
        HashMap::from([
            (
                "tool-version".to_string(),
                env!("CARGO_PKG_VERSION").to_string(),
            ),
            ("host-version".to_string(), self.config.host_version.clone()),
            ("htmlfile".to_string(), self.html_file_name(script)),
            ("cssfile".to_string(), self.css_file_name(script)),
        ])
    }

    /// Derived HTML output name: source base name plus `.html`.
    pub fn html_file_name(&self, script: &Script) -> String {
        format!("{}.html", self.base_name(script))
    }

    /// Derived stylesheet name: source base name plus `.css`.
    pub fn css_file_name(&self, script: &Script) -> String {
        format!("{}.css", self.base_name(script))
    }

    fn base_name<'a>(&'a self, script: &'a Script) -> &'a str {
        script
            .base_name()
            .unwrap_or(&self.config.default_document_name)
    }

    /// Companion stylesheet matching the classes the exporter emits.
    pub fn default_stylesheet(&self) -> String {
        format!(
            "\
body {{
  font-family: {font};
  max-width: 42em;
  margin: 1em auto;
}}
div.screenplay h1, div.screenplay h2 {{
  font-size: 100%;
}}
h1.scene-heading {{
  font-weight: bold;
  text-transform: uppercase;
}}
h2.character {{
  font-weight: normal;
  margin-left: 40%;
  margin-bottom: 0;
}}
p.dialog {{
  margin-left: 20%;
  margin-top: 0;
  max-width: 24em;
}}
p.paren {{
  margin-left: 30%;
  margin-top: 0;
  margin-bottom: 0;
}}
p.trans {{
  margin-left: 60%;
}}
",
            font = self.config.font_family
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::StyleSpan;

    #[test]
    fn test_export_is_deterministic() {
        let script = Script::new("A man enters.").with_name("scene.fountain");
        let exporter = HtmlExporter::new();
        assert_eq!(
            exporter.export(&script).unwrap(),
            exporter.export(&script).unwrap()
        );
    }

    #[test]
    fn test_export_document_shape() {
        let script = Script::new("A man enters.").with_name("scene.fountain");
        let html = HtmlExporter::new().export(&script).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>scene.html</title>"));
        assert!(html.contains("href=\"scene.css\""));
        assert!(html.contains("<div class=\"screenplay\">"));
        assert!(html.ends_with("</div>\n</body>\n</html>\n"));
    }

    #[test]
    fn test_head_bindings_for_unnamed_script() {
        let script = Script::new("text");
        let bindings = HtmlExporter::new().head_bindings(&script);
        assert_eq!(bindings["htmlfile"], "untitled.html");
        assert_eq!(bindings["cssfile"], "untitled.css");
        assert_eq!(bindings["tool-version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_custom_head_template() {
        let config = ExportConfig {
            head_template: "<html><body data-v=\"${tool-version}\">\n".to_string(),
            ..ExportConfig::default()
        };
        let script = Script::new("text");
        let html = HtmlExporter::with_config(config).export(&script).unwrap();
        assert!(html.starts_with("<html><body data-v=\""));
    }

    #[test]
    fn test_custom_default_document_name() {
        let config = ExportConfig {
            default_document_name: "screenplay".to_string(),
            ..ExportConfig::default()
        };
        let exporter = HtmlExporter::with_config(config);
        let script = Script::new("text");
        assert_eq!(exporter.html_file_name(&script), "screenplay.html");
    }

    #[test]
    fn test_cancel_flag_aborts() {
        let script = Script::with_spans(
            "INT. ROOM\n\nA man enters.",
            vec![StyleSpan::new(0, 9, "fountain-scene-heading")],
        )
        .unwrap();
        let cancel = AtomicBool::new(true);
        let err = HtmlExporter::new()
            .export_with_cancel(&script, 0..script.len(), &cancel)
            .unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }

    #[test]
    fn test_default_stylesheet_uses_configured_font() {
        let config = ExportConfig {
            font_family: "monospace".to_string(),
            ..ExportConfig::default()
        };
        let css = HtmlExporter::with_config(config).default_stylesheet();
        assert!(css.contains("font-family: monospace;"));
    }
}
