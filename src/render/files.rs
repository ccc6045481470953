//! `%files`, `%directories`, and `%symlinks` renderers.
//!
//! All three contribute bodies under the shared FILES section header.

use crate::error::ManifestError;
use crate::manifest::entry::{FileItem, LinkItem};
use crate::manifest::{Identity, ManifestDocument};

use super::templates::{TemplateKey, template};

/// Render managed-file blocks; negative entries render absent blocks.
///
/// The template source path is derived from the identity's output path and
/// the target file name, so `role/web` managing `/etc/motd` sources
/// `salt://role/web/files/etc/motd.jinja`.
#[must_use]
pub fn files(doc: &ManifestDocument, identity: &Identity) -> Option<String> {
    let path = identity.output_path();
    let blocks: Vec<String> = doc
        .entries("files")
        .map(FileItem::parse)
        .map(|item| {
            if item.negated {
                absent_block(identity, item.name, "file")
            } else {
                template(TemplateKey::FileManaged).render(&[
                    ("state", &identity.name),
                    ("path", &path),
                    ("name", item.name),
                    ("mode", item.mode),
                ])
            }
        })
        .collect();
    (!blocks.is_empty()).then(|| blocks.join("\n\n"))
}

/// Render directory-present blocks (fixed mode `0755`); negative entries
/// render absent blocks.
#[must_use]
pub fn directories(doc: &ManifestDocument, identity: &Identity) -> Option<String> {
    let blocks: Vec<String> = doc
        .entries("directories")
        .map(|entry| {
            if entry.negated {
                absent_block(identity, entry.payload, "dir")
            } else {
                template(TemplateKey::FileDirectory)
                    .render(&[("state", &identity.name), ("name", entry.payload)])
            }
        })
        .collect();
    (!blocks.is_empty()).then(|| blocks.join("\n\n"))
}

/// Render symlink blocks; negative entries render absent blocks.
///
/// # Errors
///
/// Returns [`ManifestError::MalformedSymlink`] for any entry without a
/// `->` separator.
pub fn symlinks(
    doc: &ManifestDocument,
    identity: &Identity,
) -> Result<Option<String>, ManifestError> {
    let mut blocks = Vec::new();
    for entry in doc.entries("symlinks") {
        let item = LinkItem::parse(entry)?;
        if item.negated {
            blocks.push(absent_block(identity, item.link, "link"));
        } else {
            blocks.push(template(TemplateKey::FileSymlink).render(&[
                ("state", &identity.name),
                ("linkname", item.link),
                ("targetname", item.target),
            ]));
        }
    }
    Ok((!blocks.is_empty()).then(|| blocks.join("\n\n")))
}

fn absent_block(identity: &Identity, name: &str, filedir: &str) -> String {
    template(TemplateKey::FileAbsent).render(&[
        ("state", &identity.name),
        ("name", name),
        ("filedir", filedir),
    ])
}
