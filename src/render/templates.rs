//! Static catalog of output block templates.
//!
//! Each generated block is a fixed snippet with `${name}` placeholders.
//! The catalog is built once on first use and never mutated.  The only
//! outputs that need more than placeholder substitution are the two tiered
//! lookup maps, built by [`tiered_lookup`] with plain string concatenation.

use std::collections::HashMap;
use std::sync::LazyLock;

/// A snippet with `${name}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    source: &'static str,
}

impl Template {
    const fn new(source: &'static str) -> Self {
        Self { source }
    }

    /// Substitute every `${key}` for its value.
    ///
    /// Unknown placeholders are left untouched, which keeps Jinja's own
    /// `{{ ... }}` expressions intact.
    #[must_use]
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        let mut out = self.source.to_string();
        for (key, value) in vars {
            out = out.replace(&format!("${{{key}}}"), value);
        }
        out
    }
}

/// Purpose keys of the template catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    /// `##`-banner opening a rendered section.
    ModuleHeader,
    /// Jinja import of a generated lookup map.
    MapImport,
    /// Managed file sourced from the formula's files directory.
    FileManaged,
    /// Symlink with force-overwrite semantics.
    FileSymlink,
    /// Directory present.
    FileDirectory,
    /// File, directory, or symlink absent.
    FileAbsent,
    /// Package installed, unpinned.
    PkgInstalled,
    /// Package installed, version pinned via the versions map.
    PkgInstalledPinned,
    /// Package removed.
    PkgRemoved,
    /// Package removed, asserting the pinned version.
    PkgRemovedPinned,
    /// Service running and enabled at boot.
    ServiceRunning,
    /// Service stopped and disabled at boot.
    ServiceDead,
    /// Command executed.
    CmdRun,
    /// Script executed.
    CmdScript,
    /// Aggregated sysctl declarations driven by the sysctl map.
    SysctlPresent,
    /// Cron entry present.
    CronPresent,
}

impl TemplateKey {
    /// All catalog keys, in a stable order.
    pub const ALL: [Self; 16] = [
        Self::ModuleHeader,
        Self::MapImport,
        Self::FileManaged,
        Self::FileSymlink,
        Self::FileDirectory,
        Self::FileAbsent,
        Self::PkgInstalled,
        Self::PkgInstalledPinned,
        Self::PkgRemoved,
        Self::PkgRemovedPinned,
        Self::ServiceRunning,
        Self::ServiceDead,
        Self::CmdRun,
        Self::CmdScript,
        Self::SysctlPresent,
        Self::CronPresent,
    ];

    const fn source(self) -> &'static str {
        match self {
            Self::ModuleHeader => MODULE_HEADER,
            Self::MapImport => MAP_IMPORT,
            Self::FileManaged => FILE_MANAGED,
            Self::FileSymlink => FILE_SYMLINK,
            Self::FileDirectory => FILE_DIRECTORY,
            Self::FileAbsent => FILE_ABSENT,
            Self::PkgInstalled => PKG_INSTALLED,
            Self::PkgInstalledPinned => PKG_INSTALLED_PINNED,
            Self::PkgRemoved => PKG_REMOVED,
            Self::PkgRemovedPinned => PKG_REMOVED_PINNED,
            Self::ServiceRunning => SERVICE_RUNNING,
            Self::ServiceDead => SERVICE_DEAD,
            Self::CmdRun => CMD_RUN,
            Self::CmdScript => CMD_SCRIPT,
            Self::SysctlPresent => SYSCTL_PRESENT,
            Self::CronPresent => CRON_PRESENT,
        }
    }
}

static CATALOG: LazyLock<HashMap<TemplateKey, Template>> = LazyLock::new(|| {
    TemplateKey::ALL
        .iter()
        .map(|&key| (key, Template::new(key.source())))
        .collect()
});

/// Look up a template from the catalog.
#[must_use]
pub fn template(key: TemplateKey) -> Template {
    CATALOG
        .get(&key)
        .copied()
        .unwrap_or_else(|| Template::new(key.source()))
}

/// Documentation link appended to a rendered section header.
#[must_use]
pub fn doc_link(section: &str) -> Option<&'static str> {
    DOC_LINKS
        .iter()
        .find(|(name, _)| *name == section)
        .map(|(_, url)| *url)
}

/// Salt state documentation, one link per rendered section.
const DOC_LINKS: [(&str, &str); 7] = [
    (
        "includes",
        "https://docs.saltproject.io/en/latest/ref/states/include.html",
    ),
    (
        "packages",
        "https://docs.saltproject.io/en/latest/ref/states/all/salt.states.pkg.html",
    ),
    (
        "files",
        "https://docs.saltproject.io/en/latest/ref/states/all/salt.states.file.html",
    ),
    (
        "services",
        "https://docs.saltproject.io/en/latest/ref/states/all/salt.states.service.html",
    ),
    (
        "cronjobs",
        "https://docs.saltproject.io/en/latest/ref/states/all/salt.states.cron.html",
    ),
    (
        "commands",
        "https://docs.saltproject.io/en/latest/ref/states/all/salt.states.cmd.html",
    ),
    (
        "sysctl",
        "https://docs.saltproject.io/en/latest/ref/states/all/salt.states.sysctl.html",
    ),
];

/// The five deployment tiers of a lookup map, in resolution order.
pub const TIERS: [&str; 5] = ["dev", "devint", "qa", "staging", "prod"];

/// Tier selected when the consuming system resolves no environment grain.
pub const DEFAULT_TIER: &str = "prod";

/// Build a tiered lookup map document.
///
/// Every tier repeats the same key→value pairs; tiers are not independently
/// configurable in this version.  The map is resolved at the consuming
/// system's evaluation time via `grains.filter_by` on the `environment`
/// grain, defaulting to [`DEFAULT_TIER`].
#[must_use]
pub fn tiered_lookup(binding: &str, pairs: &[(String, String)]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{{% set {binding} = salt[\"grains.filter_by\"]({{\n"));
    for tier in TIERS {
        out.push_str(&format!("    \"{tier}\": {{\n"));
        for (key, value) in pairs {
            out.push_str(&format!("        \"{key}\": \"{value}\",\n"));
        }
        out.push_str("    },\n");
    }
    out.push_str("},\n");
    out.push_str(&format!(
        "grain=\"environment\",\ndefault=\"{DEFAULT_TIER}\")\n%}}\n"
    ));
    out
}

const MODULE_HEADER: &str = r"##
##  ${module}
##    ${doc_link}";

const MAP_IMPORT: &str =
    r#"{% from "${import_path}" import ${import_name} with context %}"#;

const FILE_MANAGED: &str = r"${state}_${name}_file:
  file.managed:
    - name: ${name}
    - source: salt://${path}/files${name}.jinja
    - template: jinja
    - makedirs: True
    - mode: '${mode}'
    - user: root
    - group: root";

const FILE_SYMLINK: &str = r"${state}_${linkname}_link:
  file.symlink:
    - name: ${linkname}
    - target: ${targetname}
    - force: True
    - makedirs: True
    - mode: '0644'
    - user: root
    - group: root";

const FILE_DIRECTORY: &str = r"${state}_${name}_dir:
  file.directory:
    - name: ${name}
    - makedirs: True
    - mode: '0755'
    - user: root
    - group: root";

const FILE_ABSENT: &str = r"${state}_${name}_${filedir}:
  file.absent:
    - name: ${name}";

const PKG_INSTALLED: &str = r"${state}_${pkg}_pkg:
  pkg.installed:
    - name: ${pkg}";

const PKG_INSTALLED_PINNED: &str = r"${state}_${pkg}_pkg:
  pkg.installed:
    - name: ${pkg}
    - version: {{ ${versions}['${pkg}'] }}
    - refresh: True";

const PKG_REMOVED: &str = r"remove_${state}_${pkg}_pkg:
  pkg.removed:
    - name: ${pkg}";

const PKG_REMOVED_PINNED: &str = r"remove_${state}_${pkg}_pkg:
  pkg.removed:
    - name: ${pkg}
    - version: {{ ${versions}['${pkg}'] }}";

const SERVICE_RUNNING: &str = r"${state}_${svc}_svc:
  service.running:
    - name: ${svc}
    - enable: True";

const SERVICE_DEAD: &str = r"stop_${state}_${svc}_svc:
  service.dead:
    - name: ${svc}
    - enable: False";

const CMD_RUN: &str = r"run_${state}_${title}_cmd:
  cmd.run:
    - name: ${cmd}";

const CMD_SCRIPT: &str = r"run_${state}_${title}_script:
  cmd.script:
    - name: ${script}";

const SYSCTL_PRESENT: &str = r"{% for setting, value in ${sysctl}.items() %}
${state}_{{ setting }}:
  sysctl.present:
    - name: {{ setting }}
    - value: {{ value }}
    - config: /etc/sysctl.conf
{% endfor %}";

const CRON_PRESENT: &str = r"${state}_${command}_cronjob:
  cron.present:
    - name: ${command}
    - user: ${user}
    - minute: ${minute}
    - hour: ${hour}
    - daymonth: ${dayofmonth}
    - month: ${month}
    - dayweek: ${dayofweek}";
