//! Top-level subcommand orchestration.
//!
//! Each handler wires the manifest loader, the generation engine, and the
//! artifact writer together.  All errors convert to [`anyhow::Error`] here,
//! at the CLI boundary.

pub mod check;
pub mod completions;
pub mod generate;

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use crate::config::{self, OutputLayout};
use crate::manifest::{Identity, ManifestDocument};

/// Everything loaded from disk before rendering starts.
#[derive(Debug)]
pub struct LoadedManifest {
    /// The parsed manifest.
    pub doc: ManifestDocument,
    /// Derived state identity.
    pub identity: Identity,
    /// Output layout, from `saltern.toml` next to the manifest or defaults.
    pub layout: OutputLayout,
}

/// Read and parse the manifest plus its optional layout config.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read, the layout config is
/// invalid, or no identity can be derived.
pub fn load(manifest: &Path) -> Result<LoadedManifest> {
    let text = std::fs::read_to_string(manifest)
        .with_context(|| format!("reading {}", manifest.display()))?;
    let layout = config::load(&layout_path(manifest))?;
    let doc = ManifestDocument::parse(&text);
    let identity = Identity::derive(&doc)?;
    Ok(LoadedManifest {
        doc,
        identity,
        layout,
    })
}

/// `saltern.toml` lives next to the manifest file.
fn layout_path(manifest: &Path) -> PathBuf {
    manifest
        .parent()
        .map_or_else(|| PathBuf::from("saltern.toml"), |dir| dir.join("saltern.toml"))
}
