//! `%cronjobs` renderer.

use crate::error::ManifestError;
use crate::manifest::entry::CronItem;
use crate::manifest::{Identity, ManifestDocument};

use super::templates::{TemplateKey, template};

/// Render one `cron.present` block per entry.
///
/// Cron entries are always additive; negative entries are not supported and
/// a leading `-` is stripped and ignored.
///
/// # Errors
///
/// Returns [`ManifestError::MalformedCronEntry`] for any entry with fewer
/// than six whitespace-separated tokens.
pub fn section(
    doc: &ManifestDocument,
    identity: &Identity,
) -> Result<Option<String>, ManifestError> {
    let mut blocks = Vec::new();
    for entry in doc.entries("cronjobs") {
        let item = CronItem::parse(entry)?;
        blocks.push(template(TemplateKey::CronPresent).render(&[
            ("state", &identity.name),
            ("command", &item.command),
            ("user", item.user),
            ("minute", item.minute),
            ("hour", item.hour),
            ("dayofmonth", item.day_of_month),
            ("month", item.month),
            ("dayofweek", item.day_of_week),
        ]));
    }
    Ok((!blocks.is_empty()).then(|| blocks.join("\n\n")))
}
