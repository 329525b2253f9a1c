//! HTML escaping for run text.

/// Escape run text for embedding in an HTML element.
///
/// A single left-to-right pass replaces `&` with `&amp;`, `<` with `&lt;`,
/// `>` with `&gt;`, and each line break (`\n`, `\r\n`, or a lone `\r`) with
/// `<br>`. Because replacement characters are emitted, not re-scanned, the
/// ampersands introduced by the entities are never escaped again within
/// the pass.
///
/// The contract is one pass per run: applying this to already-escaped text
/// escapes the entity ampersands a second time.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\r' => {
                // CRLF is one line break.
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                result.push_str("<br>");
            }
            '\n' => result.push_str("<br>"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a value for embedding in a double-quoted HTML attribute.
///
/// Covers `&`, `<`, `>` and the quote itself; line breaks are not special
/// inside an attribute and pass through.
pub fn escape_attr(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}
