//! Catalog of known checks and per-check instance listings

use indexmap::IndexMap;

use crate::models::instance::{Instance, Snapshot};
use crate::models::view::{CatalogEntry, CatalogView, ServiceInstanceRow, ServiceView};
use crate::services::fingerprint::instance_id;
use crate::services::format::{locale_cmp, slugify};
use crate::services::official::is_official;

const FRONTEND_CHECK: &str = "frontend";

/// Every check key seen across instances, excluding `frontend`, sorted by name.
///
/// When instances disagree on a display name the last one in list order wins.
/// Entries with equal names keep the order their keys were first seen.
pub fn build_catalog(instances: &[Instance]) -> Vec<CatalogEntry> {
    let mut names: IndexMap<&str, &str> = IndexMap::new();

    for instance in instances {
        for (key, result) in &instance.tests {
            if key.eq_ignore_ascii_case(FRONTEND_CHECK) {
                continue;
            }
            names.insert(key.as_str(), result.display_name(key));
        }
    }

    let mut services: Vec<CatalogEntry> = names
        .into_iter()
        .map(|(key, name)| CatalogEntry {
            key: key.to_string(),
            name: name.to_string(),
        })
        .collect();
    services.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    services
}

pub fn catalog(snapshot: &Snapshot) -> CatalogView {
    CatalogView {
        services: build_catalog(&snapshot.data),
        instances: snapshot.data.clone(),
        last_updated_utc: snapshot.last_updated_utc.clone(),
    }
}

/// Resolve a check by exact key, falling back to its slug.
fn resolve_key<'a>(catalog: &'a [CatalogEntry], requested: &str) -> Option<&'a CatalogEntry> {
    catalog
        .iter()
        .find(|entry| entry.key == requested)
        .or_else(|| {
            let wanted = slugify(requested);
            catalog.iter().find(|entry| slugify(&entry.key) == wanted)
        })
}

/// Instances that ran one check, split official/community and ordered by API host.
pub fn service_view(official_domain: &str, snapshot: &Snapshot, requested: &str) -> ServiceView {
    let catalog = build_catalog(&snapshot.data);
    let Some(entry) = resolve_key(&catalog, requested) else {
        return ServiceView {
            not_found: true,
            key: requested.to_string(),
            name: None,
            official: None,
            community: None,
            last_updated_utc: snapshot.last_updated_utc.clone(),
        };
    };

    let mut official = Vec::new();
    let mut community = Vec::new();

    for instance in &snapshot.data {
        let Some(result) = instance.tests.get(&entry.key) else {
            continue;
        };
        let row = ServiceInstanceRow {
            id: instance_id(&instance.api),
            api: instance.api.clone(),
            frontend: instance.frontend.clone(),
            protocol: instance.protocol.clone(),
            status: result.status,
            message: result.message.clone(),
            online: instance.is_online(),
        };
        if is_official(official_domain, Some(instance.api.as_str())) {
            official.push(row);
        } else {
            community.push(row);
        }
    }

    official.sort_by(|a, b| a.api.cmp(&b.api));
    community.sort_by(|a, b| a.api.cmp(&b.api));

    ServiceView {
        not_found: false,
        key: entry.key.clone(),
        name: Some(entry.name.clone()),
        official: Some(official),
        community: Some(community),
        last_updated_utc: snapshot.last_updated_utc.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::instance::ServiceResult;

    const ROOT: &str = "imput.net";

    fn instance(api: &str, checks: &[(&str, Option<&str>, bool)]) -> Instance {
        Instance {
            api: api.to_string(),
            tests: checks
                .iter()
                .map(|(key, friendly, status)| {
                    (
                        key.to_string(),
                        ServiceResult {
                            friendly: friendly.map(str::to_string),
                            message: format!("{key} checked"),
                            status: *status,
                        },
                    )
                })
                .collect(),
            ..Default::default()
        }
    }

    fn snapshot(data: Vec<Instance>) -> Snapshot {
        Snapshot {
            last_updated_utc: "2025-01-02T03:04:05.000Z".to_string(),
            data,
        }
    }

    #[test]
    fn test_last_friendly_name_wins() {
        let instances = vec![
            instance("a.com", &[("x", Some("First"), true)]),
            instance("b.com", &[("x", Some("Second"), true)]),
        ];

        let catalog = build_catalog(&instances);
        assert_eq!(
            catalog,
            vec![CatalogEntry {
                key: "x".to_string(),
                name: "Second".to_string()
            }]
        );
    }

    #[test]
    fn test_skips_frontend_and_sorts_by_name() {
        let instances = vec![
            instance(
                "a.com",
                &[
                    ("FrontEnd", None, true),
                    ("youtube", Some("YouTube"), true),
                    ("bsky", Some("bluesky"), false),
                ],
            ),
            instance("b.com", &[("tiktok", None, true)]),
        ];

        let names: Vec<_> = build_catalog(&instances).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["bluesky", "tiktok", "YouTube"]);
    }

    #[test]
    fn test_equal_names_keep_first_seen_order() {
        let instances = vec![
            instance("a.com", &[("zz", Some("Same"), true), ("aa", Some("Same"), true)]),
            instance("b.com", &[("aa", Some("Same"), false), ("mm", Some("Same"), true)]),
        ];

        let keys: Vec<_> = build_catalog(&instances).into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["zz", "aa", "mm"]);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(build_catalog(&[]).is_empty());
        let view = catalog(&snapshot(vec![instance("a.com", &[])]));
        assert!(view.services.is_empty());
        assert_eq!(view.instances.len(), 1);
    }

    #[test]
    fn test_service_view_groups_instances() {
        let data = snapshot(vec![
            instance("z.example.com", &[("youtube", Some("YouTube"), true)]),
            instance("api.imput.net", &[("youtube", Some("YouTube"), false)]),
            instance("a.example.com", &[("youtube", Some("YouTube"), false)]),
            instance("b.example.com", &[("tiktok", None, true)]),
        ]);

        let view = service_view(ROOT, &data, "youtube");
        assert!(!view.not_found);
        assert_eq!(view.name.as_deref(), Some("YouTube"));

        let official = view.official.unwrap();
        assert_eq!(official.len(), 1);
        assert!(!official[0].status);

        let community: Vec<_> = view.community.unwrap().into_iter().map(|r| r.api).collect();
        assert_eq!(community, vec!["a.example.com", "z.example.com"]);
    }

    #[test]
    fn test_service_view_accepts_slug() {
        let data = snapshot(vec![instance("a.com", &[("YouTube Music", None, true)])]);

        let view = service_view(ROOT, &data, "youtube-music");
        assert!(!view.not_found);
        assert_eq!(view.key, "YouTube Music");
    }

    #[test]
    fn test_service_view_not_found() {
        let data = snapshot(vec![instance("a.com", &[("frontend", None, true)])]);

        let view = service_view(ROOT, &data, "frontend");
        assert!(view.not_found);
        assert!(view.official.is_none());
        assert_eq!(view.key, "frontend");
    }
}
