//! Display-name rules for namespaced identifiers
//!
//! Purpose names come out of the annotation processor looking like
//! `com.example.Billing#charge(java.lang.String)`. The report only shows the
//! tail of that:
//!
//! | name                                         | display name      | child label |
//! |----------------------------------------------|-------------------|-------------|
//! | `com.example.Billing`                        | `Billing`         | `#Billing`  |
//! | `com.example.Billing#charge(java.lang.Str)`  | `Billing#charge`  | `#charge`   |
//! | `Billing`                                    | `Billing`         | `#Billing`  |
//!
//! The parenthesized suffix is removed before splitting on `.` so dots inside
//! parameter lists never leak into the label.

/// Separator between namespace segments
pub const NAMESPACE_SEPARATOR: char = '.';

/// Opens the parameter suffix of a name
pub const SUFFIX_OPEN: char = '(';

/// Separates a composed purpose from its owner
pub const CHILD_SEPARATOR: char = '#';

/// Everything before the first `(`; the whole name when there is none.
pub fn strip_parenthesized(name: &str) -> &str {
    match name.find(SUFFIX_OPEN) {
        Some(i) => &name[..i],
        None => name,
    }
}

/// Segment after the final `.`; the whole string when there is no `.`.
pub fn last_segment(name: &str) -> &str {
    after_last(name, NAMESPACE_SEPARATOR)
}

/// Label for a purpose: last namespace segment with the suffix removed.
pub fn display_name(name: &str) -> &str {
    last_segment(strip_parenthesized(name))
}

/// Label for a composed purpose inside its parent: `#` plus the part of the
/// display name after its last `#`.
pub fn child_label(name: &str) -> String {
    format!(
        "{}{}",
        CHILD_SEPARATOR,
        after_last(display_name(name), CHILD_SEPARATOR)
    )
}

/// Label for a data category.
pub fn category_display_name(id: &str) -> &str {
    last_segment(id)
}

fn after_last(s: &str, sep: char) -> &str {
    match s.rfind(sep) {
        Some(i) => &s[i + sep.len_utf8()..],
        None => s,
    }
}
