//! Generation engine: renders a parsed manifest into output artifacts.
//!
//! Each manifest section has its own renderer module; this module fixes the
//! order their contributions appear in the state document and assembles the
//! final artifact set.  Rendering is a pure function: identical manifest
//! text always produces byte-identical artifacts, and no artifact survives
//! a failed render step.

pub mod commands;
pub mod cronjobs;
pub mod files;
pub mod includes;
pub mod packages;
pub mod readme;
pub mod services;
pub mod sysctl;
pub mod templates;

use crate::config::OutputLayout;
use crate::error::ManifestError;
use crate::manifest::{Identity, ManifestDocument};

use templates::{TemplateKey, doc_link, template};

/// The full set of generated artifact contents.
///
/// `None` means "nothing to persist" for that artifact.  The pillar example
/// and formula file are packaging placeholders: only their configured names
/// pass through, the engine never renders content for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Primary state document.
    pub state: String,
    /// README, absent without a `%description` section.
    pub readme: Option<String>,
    /// Tiered package-version lookup map.
    pub versions_map: Option<String>,
    /// Tiered sysctl lookup map.
    pub sysctl_map: Option<String>,
    /// Configured pillar example name (passthrough).
    pub pillar_example: String,
    /// Configured formula file name (passthrough).
    pub formula_file: String,
}

/// Render every artifact for the manifest.
///
/// # Errors
///
/// Returns [`ManifestError::MissingDescription`] when `%description` is
/// absent, or the first malformed-entry error a section renderer reports.
/// Any error means no artifacts at all.
pub fn render(
    doc: &ManifestDocument,
    identity: &Identity,
    layout: &OutputLayout,
) -> Result<Artifacts, ManifestError> {
    Ok(Artifacts {
        state: render_state(doc, identity, layout)?,
        readme: readme::render(doc, identity),
        versions_map: packages::map_doc(doc, layout),
        sysctl_map: sysctl::map_doc(doc, layout),
        pillar_example: layout.pillar_example.clone(),
        formula_file: layout.formula_file.clone(),
    })
}

/// Render the primary state document.
///
/// Fragment order is fixed: header, map imports, then the sections.
/// Non-empty fragments are separated by one blank line; absent sections
/// contribute nothing, headers included.
fn render_state(
    doc: &ManifestDocument,
    identity: &Identity,
    layout: &OutputLayout,
) -> Result<String, ManifestError> {
    let mut fragments = vec![header(doc, identity)?];

    push(&mut fragments, packages::map_import(doc, identity, layout));
    push(&mut fragments, sysctl::map_import(doc, identity, layout));

    group(&mut fragments, "includes", vec![includes::section(doc)]);
    group(
        &mut fragments,
        "sysctl",
        vec![sysctl::section(doc, identity, layout)?],
    );
    group(
        &mut fragments,
        "packages",
        vec![packages::section(doc, identity, layout)],
    );
    group(
        &mut fragments,
        "files",
        vec![
            files::directories(doc, identity),
            files::files(doc, identity),
            files::symlinks(doc, identity)?,
        ],
    );
    group(
        &mut fragments,
        "services",
        vec![services::section(doc, identity)],
    );
    group(
        &mut fragments,
        "commands",
        vec![
            commands::commands(doc, identity),
            commands::scripts(doc, identity),
        ],
    );
    group(
        &mut fragments,
        "cronjobs",
        vec![cronjobs::section(doc, identity)?],
    );

    Ok(fragments.join("\n\n") + "\n")
}

/// State document header; the description doubles as its comment banner.
fn header(doc: &ManifestDocument, identity: &Identity) -> Result<String, ManifestError> {
    let Some(lines) = doc.section("description").filter(|e| !e.is_empty()) else {
        return Err(ManifestError::MissingDescription);
    };
    let description: Vec<String> = lines.iter().map(|line| format!("#   {line}")).collect();
    Ok(format!(
        "#\n# {}\n#\n{}\n#",
        identity.name,
        description.join("\n")
    ))
}

/// Push a section header plus its bodies, or nothing when every body is
/// absent; no stray headers over empty sections.
fn group(fragments: &mut Vec<String>, name: &str, bodies: Vec<Option<String>>) {
    if bodies.iter().all(Option::is_none) {
        return;
    }
    fragments.push(module_header(name));
    for body in bodies.into_iter().flatten() {
        fragments.push(body);
    }
}

fn module_header(name: &str) -> String {
    template(TemplateKey::ModuleHeader).render(&[
        ("module", &name.to_uppercase()),
        ("doc_link", doc_link(name).unwrap_or_default()),
    ])
}

fn push(fragments: &mut Vec<String>, fragment: Option<String>) {
    if let Some(fragment) = fragment {
        fragments.push(fragment);
    }
}
