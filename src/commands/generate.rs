//! The `generate` subcommand: render and write state artifacts to disk.

use anyhow::{Context as _, Result};
use std::path::Path;

use crate::cli::{GenerateOpts, GlobalOpts};
use crate::logging::Logger;
use crate::render;

/// Run the generate command.
///
/// Renders every artifact in memory first; only when the whole render
/// succeeds does anything get written.
///
/// # Errors
///
/// Returns an error if loading, rendering, or writing fails.
pub fn run(global: &GlobalOpts, opts: &GenerateOpts, log: &Logger) -> Result<()> {
    let version = option_env!("SALTERN_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.info(&format!("saltern {version}"));

    log.stage("Loading manifest");
    let loaded = super::load(&global.manifest)?;
    log.info(&format!(
        "{} {}",
        loaded.identity.kind.as_str(),
        loaded.identity.name
    ));

    log.stage("Rendering artifacts");
    let artifacts = render::render(&loaded.doc, &loaded.identity, &loaded.layout)?;
    log.debug(&format!(
        "state {} bytes, readme {}, versions map {}, sysctl map {}",
        artifacts.state.len(),
        presence(artifacts.readme.as_deref()),
        presence(artifacts.versions_map.as_deref()),
        presence(artifacts.sysctl_map.as_deref()),
    ));

    log.stage("Writing artifacts");
    let out = &opts.output;
    let layout = &loaded.layout;
    write_artifact(
        log,
        opts.dry_run,
        &out.join(&layout.state_file),
        Some(&artifacts.state),
    )?;
    write_artifact(
        log,
        opts.dry_run,
        &out.join(&layout.readme_file),
        artifacts.readme.as_deref(),
    )?;
    write_artifact(
        log,
        opts.dry_run,
        &out.join(layout.versions_map_path()),
        artifacts.versions_map.as_deref(),
    )?;
    write_artifact(
        log,
        opts.dry_run,
        &out.join(layout.sysctl_map_path()),
        artifacts.sysctl_map.as_deref(),
    )?;

    // The managed-file blocks reference template sources under files_dir;
    // make sure the directory exists so the formula is usable as written.
    if loaded.doc.has_section("files") {
        ensure_dir(log, opts.dry_run, &out.join(&layout.files_dir))?;
    }

    Ok(())
}

fn presence(content: Option<&str>) -> &'static str {
    if content.is_some() { "yes" } else { "no" }
}

/// Persist one artifact; absent artifacts are skipped silently.
fn write_artifact(log: &Logger, dry_run: bool, path: &Path, content: Option<&str>) -> Result<()> {
    let Some(content) = content else {
        return Ok(());
    };
    if dry_run {
        log.dry_run(&format!("would write {}", path.display()));
        return Ok(());
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    log.info(&format!("wrote {}", path.display()));
    Ok(())
}

fn ensure_dir(log: &Logger, dry_run: bool, path: &Path) -> Result<()> {
    if dry_run {
        log.dry_run(&format!("would create {}", path.display()));
        return Ok(());
    }
    std::fs::create_dir_all(path).with_context(|| format!("creating {}", path.display()))?;
    log.debug(&format!("ensured {}", path.display()));
    Ok(())
}
