//! Property tests for display-name rules.

use proptest::prelude::*;

use purposeviz::domain::services::naming::{child_label, display_name, strip_parenthesized};

proptest! {
    /// PROPERTY: Naming never panics on arbitrary input, including multi-byte text.
    #[test]
    fn property_naming_never_panics(name in "(?s).{0,64}") {
        let _ = display_name(&name);
        let _ = child_label(&name);
    }

    /// PROPERTY: Display names contain neither `.` nor `(`.
    #[test]
    fn property_display_name_has_no_separators(name in "[a-z.#(), ]{0,32}") {
        let shown = display_name(&name);
        prop_assert!(!shown.contains('.'));
        prop_assert!(!shown.contains('('));
    }

    /// PROPERTY: Child labels start with `#` and contain no other `#`.
    #[test]
    fn property_child_label_has_single_hash(name in "[a-z.#(), ]{0,32}") {
        let label = child_label(&name);
        prop_assert!(label.starts_with('#'));
        prop_assert_eq!(label.matches('#').count(), 1);
    }

    /// PROPERTY: A name without `(` or `.` is shown as-is.
    #[test]
    fn property_plain_name_is_unchanged(name in "[A-Za-z#_]{0,24}") {
        prop_assert_eq!(strip_parenthesized(&name), name.as_str());
        prop_assert_eq!(display_name(&name), name.as_str());
    }
}
