//! Typed error variants for manifest parsing and rendering.
//!
//! This module provides [`ManifestError`], the structured error type shared
//! by the manifest model and the generation engine.  Every variant is fatal:
//! the first error aborts generation and nothing is written.  Command
//! handlers at the CLI boundary convert to [`anyhow::Error`] via `?`.

use thiserror::Error;

/// Errors that arise from deriving identity or rendering manifest sections.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    /// Neither `%rolename` nor `%elementname` is present with a name.
    #[error("manifest has no identity; add a %rolename or %elementname section")]
    MissingIdentity,

    /// The `%description` section is absent (required by the state header).
    #[error("manifest is missing the required %description section")]
    MissingDescription,

    /// A `%symlinks` entry has no `->` separator.
    #[error("symlink entry '{entry}' has no target; use 'linkname -> targetname'")]
    MalformedSymlink {
        /// The offending entry line.
        entry: String,
    },

    /// A positive `%sysctl` entry has no `=` separator.
    #[error("sysctl entry '{entry}' has no value; use 'setting=value'")]
    MalformedSysctl {
        /// The offending entry line.
        entry: String,
    },

    /// A `%cronjobs` entry has fewer than the six required schedule fields.
    #[error(
        "cron entry '{entry}' is incomplete; expected 'minute hour day-of-month month day-of-week user command'"
    )]
    MalformedCronEntry {
        /// The offending entry line.
        entry: String,
    },
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_identity_display() {
        let e = ManifestError::MissingIdentity;
        assert!(e.to_string().contains("%rolename"));
        assert!(e.to_string().contains("%elementname"));
    }

    #[test]
    fn missing_description_display() {
        let e = ManifestError::MissingDescription;
        assert!(e.to_string().contains("%description"));
    }

    #[test]
    fn malformed_symlink_display() {
        let e = ManifestError::MalformedSymlink {
            entry: "/etc/motd".to_string(),
        };
        assert!(e.to_string().contains("/etc/motd"));
        assert!(e.to_string().contains("->"));
    }

    #[test]
    fn malformed_sysctl_display() {
        let e = ManifestError::MalformedSysctl {
            entry: "vm.swappiness".to_string(),
        };
        assert!(e.to_string().contains("vm.swappiness"));
        assert!(e.to_string().contains("setting=value"));
    }

    #[test]
    fn malformed_cron_display() {
        let e = ManifestError::MalformedCronEntry {
            entry: "0 2 * *".to_string(),
        };
        assert!(e.to_string().contains("0 2 * *"));
        assert!(e.to_string().contains("day-of-week"));
    }

    #[test]
    fn manifest_error_converts_to_anyhow() {
        let e = ManifestError::MissingIdentity;
        let _anyhow_err: anyhow::Error = e.into();
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn manifest_error_is_send_sync() {
        assert_send_sync::<ManifestError>();
    }
}
