//! Per-section entry micro-syntax.
//!
//! Every entry line may carry a leading `-` modifier ("remove/absent");
//! some sections further split the payload on a section-specific separator.
//! All splits trim whitespace around the separator, so `name = value` and
//! `name=value` are equivalent.

use crate::error::ManifestError;

/// A raw section line split into its modifier and payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    /// `true` when the line carries the leading `-` modifier.
    pub negated: bool,
    /// The line with the modifier stripped.
    pub payload: &'a str,
}

impl<'a> Entry<'a> {
    /// Split a trimmed entry line into modifier and payload.
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        line.strip_prefix('-').map_or(
            Self {
                negated: false,
                payload: line,
            },
            |rest| Self {
                negated: true,
                payload: rest.trim_start(),
            },
        )
    }
}

/// Split `payload` once on `sep`, trimming around the separator.
///
/// An empty right-hand side counts as "no value".
fn split_pair<'a>(payload: &'a str, sep: &str) -> (&'a str, Option<&'a str>) {
    match payload.split_once(sep) {
        Some((left, right)) => {
            let right = right.trim_start();
            (left.trim_end(), (!right.is_empty()).then_some(right))
        }
        None => (payload, None),
    }
}

/// A `%packages` entry: package name plus optional pinned version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageItem<'a> {
    /// Remove rather than install.
    pub negated: bool,
    /// Package name.
    pub name: &'a str,
    /// Pinned version, when the entry carries `name=version`.
    pub version: Option<&'a str>,
}

impl<'a> PackageItem<'a> {
    /// Parse a `%packages` entry.
    #[must_use]
    pub fn parse(entry: Entry<'a>) -> Self {
        let (name, version) = split_pair(entry.payload, "=");
        Self {
            negated: entry.negated,
            name,
            version,
        }
    }
}

/// A `%files` entry: file name plus mode (default `0644`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileItem<'a> {
    /// Remove rather than manage.
    pub negated: bool,
    /// Target file name.
    pub name: &'a str,
    /// Octal mode string.
    pub mode: &'a str,
}

impl<'a> FileItem<'a> {
    /// Parse a `%files` entry.
    #[must_use]
    pub fn parse(entry: Entry<'a>) -> Self {
        let (name, mode) = split_pair(entry.payload, "=");
        Self {
            negated: entry.negated,
            name,
            mode: mode.unwrap_or("0644"),
        }
    }
}

/// A `%symlinks` entry: link name and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkItem<'a> {
    /// Remove rather than create.
    pub negated: bool,
    /// Link path.
    pub link: &'a str,
    /// Target path the link points at.
    pub target: &'a str,
}

impl<'a> LinkItem<'a> {
    /// Parse a `%symlinks` entry.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::MalformedSymlink`] when the entry has no
    /// `->` separator.
    pub fn parse(entry: Entry<'a>) -> Result<Self, ManifestError> {
        let Some((link, target)) = entry.payload.split_once("->") else {
            return Err(ManifestError::MalformedSymlink {
                entry: entry.payload.to_string(),
            });
        };
        Ok(Self {
            negated: entry.negated,
            link: link.trim_end(),
            target: target.trim_start(),
        })
    }
}

/// A `%sysctl` entry: setting name plus optional value.
///
/// A missing value is only an error for positive entries; the renderer
/// enforces that, because a negative entry suppresses the whole section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SysctlItem<'a> {
    /// Removal marker (suppresses sysctl generation entirely).
    pub negated: bool,
    /// Kernel setting name.
    pub setting: &'a str,
    /// Setting value, when the entry carries `setting=value`.
    pub value: Option<&'a str>,
}

impl<'a> SysctlItem<'a> {
    /// Parse a `%sysctl` entry.
    #[must_use]
    pub fn parse(entry: Entry<'a>) -> Self {
        let (setting, value) = split_pair(entry.payload, "=");
        Self {
            negated: entry.negated,
            setting,
            value,
        }
    }
}

/// A `%cronjobs` entry: five schedule fields, the user, and the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronItem<'a> {
    /// Minute field.
    pub minute: &'a str,
    /// Hour field.
    pub hour: &'a str,
    /// Day-of-month field.
    pub day_of_month: &'a str,
    /// Month field.
    pub month: &'a str,
    /// Day-of-week field.
    pub day_of_week: &'a str,
    /// User the job runs as.
    pub user: &'a str,
    /// Remaining tokens joined by single spaces.
    pub command: String,
}

impl<'a> CronItem<'a> {
    /// Parse a `%cronjobs` entry.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::MalformedCronEntry`] when the entry has
    /// fewer than six whitespace-separated tokens.
    pub fn parse(entry: Entry<'a>) -> Result<Self, ManifestError> {
        let mut tokens = entry.payload.split_whitespace();
        let (Some(minute), Some(hour), Some(day_of_month), Some(month), Some(day_of_week), Some(user)) = (
            tokens.next(),
            tokens.next(),
            tokens.next(),
            tokens.next(),
            tokens.next(),
            tokens.next(),
        ) else {
            return Err(ManifestError::MalformedCronEntry {
                entry: entry.payload.to_string(),
            });
        };
        Ok(Self {
            minute,
            hour,
            day_of_month,
            month,
            day_of_week,
            user,
            command: tokens.collect::<Vec<_>>().join(" "),
        })
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn entry_positive() {
        let entry = Entry::parse("nginx");
        assert!(!entry.negated);
        assert_eq!(entry.payload, "nginx");
    }

    #[test]
    fn entry_negated_strips_modifier_and_space() {
        let entry = Entry::parse("- nginx");
        assert!(entry.negated);
        assert_eq!(entry.payload, "nginx");
    }

    #[test]
    fn package_unversioned() {
        let item = PackageItem::parse(Entry::parse("nginx"));
        assert_eq!(item.name, "nginx");
        assert_eq!(item.version, None);
    }

    #[test]
    fn package_versioned() {
        let item = PackageItem::parse(Entry::parse("nginx=1.18"));
        assert_eq!(item.name, "nginx");
        assert_eq!(item.version, Some("1.18"));
    }

    #[test]
    fn package_version_whitespace_trimmed() {
        let item = PackageItem::parse(Entry::parse("nginx = 1.18"));
        assert_eq!(item.name, "nginx");
        assert_eq!(item.version, Some("1.18"));
    }

    #[test]
    fn package_empty_version_is_none() {
        let item = PackageItem::parse(Entry::parse("nginx="));
        assert_eq!(item.version, None);
    }

    #[test]
    fn package_negated_versioned() {
        let item = PackageItem::parse(Entry::parse("-nginx=1.18"));
        assert!(item.negated);
        assert_eq!(item.name, "nginx");
        assert_eq!(item.version, Some("1.18"));
    }

    #[test]
    fn file_default_mode() {
        let item = FileItem::parse(Entry::parse("/etc/motd"));
        assert_eq!(item.name, "/etc/motd");
        assert_eq!(item.mode, "0644");
    }

    #[test]
    fn file_explicit_mode() {
        let item = FileItem::parse(Entry::parse("/etc/sudoers=0440"));
        assert_eq!(item.name, "/etc/sudoers");
        assert_eq!(item.mode, "0440");
    }

    #[test]
    fn link_with_target() {
        let item = LinkItem::parse(Entry::parse("/usr/bin/vi -> /usr/bin/vim")).unwrap();
        assert_eq!(item.link, "/usr/bin/vi");
        assert_eq!(item.target, "/usr/bin/vim");
    }

    #[test]
    fn link_without_target_is_malformed() {
        let err = LinkItem::parse(Entry::parse("/usr/bin/vi")).unwrap_err();
        assert_eq!(
            err,
            ManifestError::MalformedSymlink {
                entry: "/usr/bin/vi".to_string()
            }
        );
    }

    #[test]
    fn sysctl_with_value() {
        let item = SysctlItem::parse(Entry::parse("vm.swappiness=10"));
        assert_eq!(item.setting, "vm.swappiness");
        assert_eq!(item.value, Some("10"));
    }

    #[test]
    fn sysctl_without_value_parses() {
        let item = SysctlItem::parse(Entry::parse("-net.ipv4.ip_forward"));
        assert!(item.negated);
        assert_eq!(item.setting, "net.ipv4.ip_forward");
        assert_eq!(item.value, None);
    }

    #[test]
    fn cron_full_entry() {
        let item = CronItem::parse(Entry::parse("0 2 * * 1 root /usr/bin/backup --all")).unwrap();
        assert_eq!(item.minute, "0");
        assert_eq!(item.hour, "2");
        assert_eq!(item.day_of_month, "*");
        assert_eq!(item.month, "*");
        assert_eq!(item.day_of_week, "1");
        assert_eq!(item.user, "root");
        assert_eq!(item.command, "/usr/bin/backup --all");
    }

    #[test]
    fn cron_collapses_command_whitespace() {
        let item = CronItem::parse(Entry::parse("0 2 * * 1 root echo   hello")).unwrap();
        assert_eq!(item.command, "echo hello");
    }

    #[test]
    fn cron_exactly_six_tokens_has_empty_command() {
        let item = CronItem::parse(Entry::parse("0 2 * * 1 root")).unwrap();
        assert_eq!(item.command, "");
    }

    #[test]
    fn cron_five_tokens_is_malformed() {
        let err = CronItem::parse(Entry::parse("0 2 * * 1")).unwrap_err();
        assert_eq!(
            err,
            ManifestError::MalformedCronEntry {
                entry: "0 2 * * 1".to_string()
            }
        );
    }
}
