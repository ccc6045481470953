//! `%sysctl` renderer and the tiered sysctl lookup map.
//!
//! Removal of individual sysctl settings is not supported: one negative
//! entry anywhere in the section suppresses the whole sysctl contribution
//! (block, map import, and map).  See DESIGN.md for why this asymmetry is
//! kept rather than turned into per-key removal.

use crate::config::OutputLayout;
use crate::error::ManifestError;
use crate::manifest::entry::SysctlItem;
use crate::manifest::{Identity, ManifestDocument};

use super::templates::{TemplateKey, template, tiered_lookup};

fn items(doc: &ManifestDocument) -> Vec<SysctlItem<'_>> {
    doc.entries("sysctl").map(SysctlItem::parse).collect()
}

fn suppressed(doc: &ManifestDocument) -> bool {
    items(doc).iter().any(|item| item.negated)
}

/// `true` iff the sysctl contribution is live: at least one entry carries
/// a value and no removal marker exists.
#[must_use]
pub fn has_value(doc: &ManifestDocument) -> bool {
    !suppressed(doc) && items(doc).iter().any(|item| item.value.is_some())
}

/// Import of the sysctl map, emitted only when the contribution is live.
#[must_use]
pub fn map_import(
    doc: &ManifestDocument,
    identity: &Identity,
    layout: &OutputLayout,
) -> Option<String> {
    has_value(doc).then(|| {
        let path = format!("{}/{}", identity.output_path(), layout.sysctl_map_path());
        template(TemplateKey::MapImport).render(&[
            ("import_path", &path),
            ("import_name", layout.sysctl_binding()),
        ])
    })
}

/// Render the aggregated sysctl block.
///
/// One block covers the whole section: a Jinja loop over the imported map
/// emits a `sysctl.present` declaration per pair, so repeated renders stay
/// idempotent regardless of how many entries the section holds.
///
/// # Errors
///
/// Returns [`ManifestError::MalformedSysctl`] when a positive entry has no
/// `=` separator (and no removal marker suppressed the section first).
pub fn section(
    doc: &ManifestDocument,
    identity: &Identity,
    layout: &OutputLayout,
) -> Result<Option<String>, ManifestError> {
    let items = items(doc);
    if items.is_empty() || items.iter().any(|item| item.negated) {
        return Ok(None);
    }
    for item in &items {
        if item.value.is_none() {
            return Err(ManifestError::MalformedSysctl {
                entry: item.setting.to_string(),
            });
        }
    }
    Ok(Some(template(TemplateKey::SysctlPresent).render(&[
        ("state", &identity.name),
        ("sysctl", layout.sysctl_binding()),
    ])))
}

/// Build the tiered sysctl map, `None` when the contribution is not live.
///
/// Pairs are sorted by setting and exact duplicates dropped, so repeated
/// renders are byte-identical.
#[must_use]
pub fn map_doc(doc: &ManifestDocument, layout: &OutputLayout) -> Option<String> {
    if !has_value(doc) {
        return None;
    }
    let mut pairs: Vec<(String, String)> = items(doc)
        .iter()
        .filter_map(|item| {
            item.value
                .map(|value| (item.setting.to_string(), value.to_string()))
        })
        .collect();
    pairs.sort();
    pairs.dedup();
    Some(tiered_lookup(layout.sysctl_binding(), &pairs))
}
