//! Output layout configuration.
//!
//! The engine itself only produces strings; the names of the files they are
//! persisted under come from here.  An optional `saltern.toml` next to the
//! manifest overrides the defaults:
//!
//! ```toml
//! [output]
//! state_file = "init.sls"
//! maps_dir = "maps"
//! ```

use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::path::Path;

/// File and directory base names for generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputLayout {
    /// Primary state document file name.
    pub state_file: String,
    /// README file name.
    pub readme_file: String,
    /// Directory holding the generated lookup maps.
    pub maps_dir: String,
    /// Directory holding managed-file template sources.
    pub files_dir: String,
    /// Package-version lookup map file name.
    pub versions_map: String,
    /// Sysctl lookup map file name.
    pub sysctl_map: String,
    /// Pillar example placeholder name (packaging concern, never rendered).
    pub pillar_example: String,
    /// Formula file placeholder name (packaging concern, never rendered).
    pub formula_file: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            state_file: "init.sls".to_string(),
            readme_file: "README.md".to_string(),
            maps_dir: "maps".to_string(),
            files_dir: "files".to_string(),
            versions_map: "versions.map.jinja".to_string(),
            sysctl_map: "sysctl.map.jinja".to_string(),
            pillar_example: "pillar.example".to_string(),
            formula_file: "FORMULA".to_string(),
        }
    }
}

impl OutputLayout {
    /// Versions map path relative to the output directory.
    #[must_use]
    pub fn versions_map_path(&self) -> String {
        format!("{}/{}", self.maps_dir, self.versions_map)
    }

    /// Sysctl map path relative to the output directory.
    #[must_use]
    pub fn sysctl_map_path(&self) -> String {
        format!("{}/{}", self.maps_dir, self.sysctl_map)
    }

    /// Jinja binding name the versions map exports.
    #[must_use]
    pub fn versions_binding(&self) -> &str {
        import_name(&self.versions_map)
    }

    /// Jinja binding name the sysctl map exports.
    #[must_use]
    pub fn sysctl_binding(&self) -> &str {
        import_name(&self.sysctl_map)
    }
}

/// Derive the Jinja import binding from a map file name: the stem before
/// the first `.` (`versions.map.jinja` → `versions`).
#[must_use]
pub fn import_name(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// Wrapper for the `[output]` table in `saltern.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    output: OutputLayout,
}

/// Load the output layout from `saltern.toml`.
///
/// A missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load(path: &Path) -> Result<OutputLayout> {
    if !path.exists() {
        return Ok(OutputLayout::default());
    }
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let parsed: ConfigFile =
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    Ok(parsed.output)
}
