//! `%services` renderer.

use crate::manifest::{Identity, ManifestDocument};

use super::templates::{TemplateKey, template};

/// Render one block per service entry: positive entries run and enable the
/// service at boot, negative entries stop and disable it.
#[must_use]
pub fn section(doc: &ManifestDocument, identity: &Identity) -> Option<String> {
    let blocks: Vec<String> = doc
        .entries("services")
        .map(|entry| {
            let key = if entry.negated {
                TemplateKey::ServiceDead
            } else {
                TemplateKey::ServiceRunning
            };
            template(key).render(&[("state", &identity.name), ("svc", entry.payload)])
        })
        .collect();
    (!blocks.is_empty()).then(|| blocks.join("\n\n"))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::manifest::IdentityKind;

    fn identity() -> Identity {
        Identity {
            kind: IdentityKind::Role,
            name: "web".to_string(),
        }
    }

    #[test]
    fn running_and_enabled() {
        let doc = ManifestDocument::parse("%services\nnginx\n");
        let out = section(&doc, &identity()).unwrap();
        assert!(out.contains("web_nginx_svc:"));
        assert!(out.contains("service.running:"));
        assert!(out.contains("- enable: True"));
    }

    #[test]
    fn stopped_and_disabled() {
        let doc = ManifestDocument::parse("%services\n- telnetd\n");
        let out = section(&doc, &identity()).unwrap();
        assert!(out.contains("stop_web_telnetd_svc:"));
        assert!(out.contains("service.dead:"));
        assert!(out.contains("- enable: False"));
    }

    #[test]
    fn absent_section_renders_nothing() {
        let doc = ManifestDocument::parse("");
        assert_eq!(section(&doc, &identity()), None);
    }
}
