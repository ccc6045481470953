//! State identity derived from the manifest's naming section.

use super::ManifestDocument;
use crate::error::ManifestError;

/// Which naming section the identity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {
    /// Named by `%rolename`.
    Role,
    /// Named by `%elementname`.
    Element,
}

impl IdentityKind {
    /// Category string used in generated paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Element => "element",
        }
    }
}

/// The state identity: category plus dotted state name.
///
/// Every generated block id and cross-reference path is derived from this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Identity category.
    pub kind: IdentityKind,
    /// Dotted state name, e.g. `web.nginx`.
    pub name: String,
}

impl Identity {
    /// Derive the identity from a parsed manifest.
    ///
    /// `%rolename` takes precedence; an empty naming section falls through
    /// to the other one.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::MissingIdentity`] when neither `%rolename`
    /// nor `%elementname` yields a non-empty name.
    pub fn derive(doc: &ManifestDocument) -> Result<Self, ManifestError> {
        if let Some(name) = first_entry(doc, "rolename") {
            return Ok(Self {
                kind: IdentityKind::Role,
                name,
            });
        }
        if let Some(name) = first_entry(doc, "elementname") {
            return Ok(Self {
                kind: IdentityKind::Element,
                name,
            });
        }
        Err(ManifestError::MissingIdentity)
    }

    /// Cross-reference path embedded in generated import statements:
    /// category joined with the dotted name, dots replaced by `/`.
    ///
    /// Always uses `/`; these are Salt fileserver references, not OS paths.
    #[must_use]
    pub fn output_path(&self) -> String {
        format!("{}/{}", self.kind.as_str(), self.name.replace('.', "/"))
    }
}

fn first_entry(doc: &ManifestDocument, section: &str) -> Option<String> {
    doc.section(section)
        .and_then(|entries| entries.first())
        .filter(|name| !name.is_empty())
        .cloned()
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn derive_rolename() {
        let doc = ManifestDocument::parse("%rolename\nweb.nginx\n");
        let identity = Identity::derive(&doc).unwrap();
        assert_eq!(identity.kind, IdentityKind::Role);
        assert_eq!(identity.name, "web.nginx");
    }

    #[test]
    fn derive_elementname() {
        let doc = ManifestDocument::parse("%elementname\nntp\n");
        let identity = Identity::derive(&doc).unwrap();
        assert_eq!(identity.kind, IdentityKind::Element);
        assert_eq!(identity.name, "ntp");
    }

    #[test]
    fn rolename_takes_precedence() {
        let doc = ManifestDocument::parse("%elementname\nntp\n%rolename\nweb\n");
        let identity = Identity::derive(&doc).unwrap();
        assert_eq!(identity.kind, IdentityKind::Role);
        assert_eq!(identity.name, "web");
    }

    #[test]
    fn empty_rolename_falls_through() {
        let doc = ManifestDocument::parse("%rolename\n%elementname\nntp\n");
        let identity = Identity::derive(&doc).unwrap();
        assert_eq!(identity.kind, IdentityKind::Element);
    }

    #[test]
    fn missing_identity_is_an_error() {
        let doc = ManifestDocument::parse("%description\nsomething\n");
        assert_eq!(
            Identity::derive(&doc).unwrap_err(),
            ManifestError::MissingIdentity
        );
    }

    #[test]
    fn output_path_replaces_dots() {
        let identity = Identity {
            kind: IdentityKind::Role,
            name: "web.nginx".to_string(),
        };
        assert_eq!(identity.output_path(), "role/web/nginx");
    }

    #[test]
    fn output_path_element() {
        let identity = Identity {
            kind: IdentityKind::Element,
            name: "ntp".to_string(),
        };
        assert_eq!(identity.output_path(), "element/ntp");
    }
}
