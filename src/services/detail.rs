//! Per-instance page data

use crate::models::instance::{Instance, Snapshot};
use crate::models::view::{DetailInstance, DetailView, ServiceRow};
use crate::services::fingerprint::{fingerprint, strip_scheme};
use crate::services::format::locale_cmp;
use crate::services::official::api_nick;

const FRONTEND_CHECK: &str = "frontend";
const NO_FRONTEND: &str = "None";

/// First instance whose API host fingerprints to `id`.
///
/// Colliding fingerprints resolve to the earliest instance in the list.
pub fn find_instance<'a>(instances: &'a [Instance], id: &str) -> Option<&'a Instance> {
    instances
        .iter()
        .find(|instance| fingerprint(strip_scheme(&instance.api)) == id)
}

/// Check rows with `frontend` pinned first and the rest by display name.
pub fn service_rows(instance: &Instance) -> Vec<ServiceRow> {
    let (mut pinned, mut rest): (Vec<_>, Vec<_>) = instance
        .tests
        .iter()
        .map(|(key, result)| ServiceRow {
            key: key.clone(),
            friendly: result.display_name(key).to_string(),
            status: result.status,
            message: result.message.clone(),
        })
        .partition(|row| row.key.eq_ignore_ascii_case(FRONTEND_CHECK));

    rest.sort_by(|a, b| locale_cmp(&a.friendly, &b.friendly));
    pinned.append(&mut rest);
    pinned
}

pub fn assemble(official_domain: &str, instance: &Instance) -> DetailInstance {
    let api_host = strip_scheme(&instance.api).to_string();
    let title_host = match strip_scheme(&instance.frontend) {
        "" => NO_FRONTEND.to_string(),
        host => host.to_string(),
    };

    let mut wrapped = instance.clone();
    wrapped.online = None;

    DetailInstance {
        api_nick: api_nick(official_domain, &api_host),
        services: service_rows(instance),
        online: instance.is_online(),
        instance: wrapped,
        title_host,
        api_host,
    }
}

pub fn detail(official_domain: &str, snapshot: &Snapshot, id: &str) -> DetailView {
    let instance = find_instance(&snapshot.data, id).map(|found| assemble(official_domain, found));

    DetailView {
        not_found: instance.is_none(),
        id: id.to_string(),
        instance,
        last_updated_utc: snapshot.last_updated_utc.clone(),
    }
}
