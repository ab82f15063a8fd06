//! HTML escaping for text interpolated into the report
//!
//! Purpose names, descriptions and policy URLs are authored by hand and may
//! contain markup characters; every value goes through [`escape_html`] before
//! it reaches the document.

/// Escape a string for HTML text and double-quoted attribute values
///
/// Escapes: ampersand, angle brackets, double and single quotes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
