//! README renderer.

use crate::manifest::{Identity, ManifestDocument};

/// Render the README, `None` when `%description` is absent or empty.
///
/// The description lines are joined verbatim, optional `%readme` lines are
/// appended, and the document closes with a credit line.
#[must_use]
pub fn render(doc: &ManifestDocument, identity: &Identity) -> Option<String> {
    let description = doc.section("description").filter(|e| !e.is_empty())?.join("\n");

    let mut out = format!("**{}**\n====\n*{description}*\n", identity.name);
    if let Some(readme) = doc.section("readme").filter(|e| !e.is_empty()) {
        out.push('\n');
        out.push_str(&readme.join("\n"));
        out.push('\n');
    }
    out.push_str("\ngenerated with a little help from [saltern](https://github.com/saltern/saltern)\n");
    Some(out)
}
