//! The `check` subcommand: parse and render the manifest without writing.

use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::logging::Logger;
use crate::render;

/// Run the check command: parse and render without writing anything.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or any render step
/// fails; the same failures `generate` would hit, minus the writes.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    log.stage("Checking manifest");
    let loaded = super::load(&global.manifest)?;
    log.info(&format!(
        "{} {}",
        loaded.identity.kind.as_str(),
        loaded.identity.name
    ));

    let artifacts = render::render(&loaded.doc, &loaded.identity, &loaded.layout)?;

    log.info(&format!(
        "{}: {} bytes",
        loaded.layout.state_file,
        artifacts.state.len()
    ));
    report(log, &loaded.layout.readme_file, artifacts.readme.as_deref());
    report(
        log,
        &loaded.layout.versions_map_path(),
        artifacts.versions_map.as_deref(),
    );
    report(
        log,
        &loaded.layout.sysctl_map_path(),
        artifacts.sysctl_map.as_deref(),
    );

    log.info("manifest OK");
    Ok(())
}

fn report(log: &Logger, name: &str, content: Option<&str>) {
    match content {
        Some(content) => log.info(&format!("{name}: {} bytes", content.len())),
        None => log.debug(&format!("{name}: not produced")),
    }
}
