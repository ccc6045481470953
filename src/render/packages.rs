//! `%packages` renderer and the tiered package-version lookup map.

use crate::config::OutputLayout;
use crate::manifest::entry::PackageItem;
use crate::manifest::{Identity, ManifestDocument};

use super::templates::{TemplateKey, template, tiered_lookup};

fn items(doc: &ManifestDocument) -> Vec<PackageItem<'_>> {
    doc.entries("packages").map(PackageItem::parse).collect()
}

/// `true` iff any package entry carries a pinned version.
#[must_use]
pub fn has_versioned(doc: &ManifestDocument) -> bool {
    items(doc).iter().any(|item| item.version.is_some())
}

/// Import of the versions map, emitted only when a versioned entry exists.
#[must_use]
pub fn map_import(
    doc: &ManifestDocument,
    identity: &Identity,
    layout: &OutputLayout,
) -> Option<String> {
    has_versioned(doc).then(|| {
        let path = format!("{}/{}", identity.output_path(), layout.versions_map_path());
        template(TemplateKey::MapImport).render(&[
            ("import_path", &path),
            ("import_name", layout.versions_binding()),
        ])
    })
}

/// Render one block per package entry.
///
/// Template choice is a 2×2 decision on modifier × version: install,
/// install pinned, remove, remove asserting the pinned version.  Pinned
/// variants resolve the version from the tiered map at evaluation time.
#[must_use]
pub fn section(
    doc: &ManifestDocument,
    identity: &Identity,
    layout: &OutputLayout,
) -> Option<String> {
    let blocks: Vec<String> = items(doc)
        .iter()
        .map(|item| {
            let key = match (item.negated, item.version) {
                (false, None) => TemplateKey::PkgInstalled,
                (false, Some(_)) => TemplateKey::PkgInstalledPinned,
                (true, None) => TemplateKey::PkgRemoved,
                (true, Some(_)) => TemplateKey::PkgRemovedPinned,
            };
            template(key).render(&[
                ("state", &identity.name),
                ("pkg", item.name),
                ("versions", layout.versions_binding()),
            ])
        })
        .collect();
    (!blocks.is_empty()).then(|| blocks.join("\n\n"))
}

/// Build the tiered versions map, `None` when no entry carries a version.
///
/// Pairs keep manifest order; removals with an asserted version are
/// included, since their blocks also resolve through the map.
#[must_use]
pub fn map_doc(doc: &ManifestDocument, layout: &OutputLayout) -> Option<String> {
    let pairs: Vec<(String, String)> = items(doc)
        .iter()
        .filter_map(|item| {
            item.version
                .map(|version| (item.name.to_string(), version.to_string()))
        })
        .collect();
    (!pairs.is_empty()).then(|| tiered_lookup(layout.versions_binding(), &pairs))
}
