//! `%includes` renderer: one verbatim list item per entry.

use crate::manifest::ManifestDocument;

/// Render the include list, `None` when the section is absent or empty.
///
/// Includes are always additive; entries are referenced verbatim, so no
/// modifier semantics apply.
#[must_use]
pub fn section(doc: &ManifestDocument) -> Option<String> {
    let entries = doc.section("includes").filter(|e| !e.is_empty())?;
    let mut out = String::from("include:");
    for entry in entries {
        out.push_str("\n  - ");
        out.push_str(entry);
    }
    Some(out)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn renders_list_items_verbatim() {
        let doc = ManifestDocument::parse("%includes\ncommon.ntp\ncommon.users\n");
        assert_eq!(
            section(&doc).unwrap(),
            "include:\n  - common.ntp\n  - common.users"
        );
    }

    #[test]
    fn modifier_is_not_special() {
        // includes are additive; a leading '-' is part of the reference
        let doc = ManifestDocument::parse("%includes\n-weird.name\n");
        assert_eq!(section(&doc).unwrap(), "include:\n  - -weird.name");
    }

    #[test]
    fn absent_section_renders_nothing() {
        let doc = ManifestDocument::parse("");
        assert_eq!(section(&doc), None);
    }

    #[test]
    fn empty_section_renders_nothing() {
        let doc = ManifestDocument::parse("%includes\n");
        assert_eq!(section(&doc), None);
    }
}
