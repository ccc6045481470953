//! `%commands` and `%scripts` renderers.
//!
//! Both contribute bodies under the shared COMMANDS section header and are
//! always additive; a leading `-` modifier is stripped and otherwise
//! ignored.

use crate::manifest::{Identity, ManifestDocument};

use super::templates::{TemplateKey, template};

/// Render one block per command entry.
///
/// The block id suffix is the command's first whitespace-delimited token;
/// the full entry text is the executed command line.
#[must_use]
pub fn commands(doc: &ManifestDocument, identity: &Identity) -> Option<String> {
    let blocks: Vec<String> = doc
        .entries("commands")
        .map(|entry| {
            let title = entry.payload.split_whitespace().next().unwrap_or("");
            template(TemplateKey::CmdRun).render(&[
                ("state", &identity.name),
                ("title", title),
                ("cmd", entry.payload),
            ])
        })
        .collect();
    (!blocks.is_empty()).then(|| blocks.join("\n\n"))
}

/// Render one block per script entry.
///
/// Each entry names an externally supplied script to execute; the block id
/// suffix is the script path itself.
#[must_use]
pub fn scripts(doc: &ManifestDocument, identity: &Identity) -> Option<String> {
    let blocks: Vec<String> = doc
        .entries("scripts")
        .map(|entry| {
            template(TemplateKey::CmdScript).render(&[
                ("state", &identity.name),
                ("title", entry.payload),
                ("script", entry.payload),
            ])
        })
        .collect();
    (!blocks.is_empty()).then(|| blocks.join("\n\n"))
}
