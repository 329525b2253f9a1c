//! `${key}` template rendering for the document head.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Render `template`, substituting `${key}` placeholders from `bindings`.
///
/// Unrecognized keys are left literally in the output rather than dropped
/// or rejected; only an unterminated `${` fails. No escaping is applied to
/// substituted values, so untrusted bindings must be escaped by the caller.
pub fn render_template(template: &str, bindings: &HashMap<String, String>) -> Result<String> {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    let mut consumed = 0;

    while let Some(open) = rest.find("${") {
        result.push_str(&rest[..open]);
        let body = &rest[open + 2..];
        let Some(close) = body.find('}') else {
            return Err(Error::MalformedTemplate { at: consumed + open });
        };
        let key = &body[..close];
        match bindings.get(key) {
            Some(value) => result.push_str(value),
            None => {
                result.push_str("${");
                result.push_str(key);
                result.push('}');
            }
        }
        let advance = open + 2 + close + 1;
        consumed += advance;
        rest = &rest[advance..];
    }
    result.push_str(rest);
    Ok(result)
}
