//! Scores and groups instances for the overview page

use std::cmp::Ordering;

use crate::models::instance::{Instance, Snapshot};
use crate::models::view::{EnrichedInstance, OverviewView, Totals};
use crate::services::fingerprint::instance_id;
use crate::services::format::locale_cmp;
use crate::services::official::is_official;

/// Count passing checks.
pub fn totals(instance: &Instance) -> Totals {
    Totals {
        up: instance.tests.values().filter(|t| t.status).count(),
        total: instance.tests.len(),
    }
}

/// Percentage of passing checks rounded half up, 0 when nothing ran.
pub fn score_pct(totals: Totals) -> u32 {
    if totals.total == 0 {
        return 0;
    }
    ((200 * totals.up + totals.total) / (2 * totals.total)) as u32
}

pub fn enrich(official_domain: &str, instance: &Instance) -> EnrichedInstance {
    let totals = totals(instance);
    let online = instance.is_online();

    let mut instance = instance.clone();
    instance.online = None;

    EnrichedInstance {
        id: instance_id(&instance.api),
        totals,
        score_pct: score_pct(totals),
        official_computed: is_official(official_domain, Some(instance.api.as_str())),
        online,
        instance,
    }
}

/// Best score first, then by frontend host.
fn overview_order(a: &EnrichedInstance, b: &EnrichedInstance) -> Ordering {
    b.score_pct
        .cmp(&a.score_pct)
        .then_with(|| locale_cmp(&a.instance.frontend, &b.instance.frontend))
}

/// Split instances into sorted official and community lists.
pub fn aggregate(
    official_domain: &str,
    instances: &[Instance],
) -> (Vec<EnrichedInstance>, Vec<EnrichedInstance>) {
    let (mut official, mut community): (Vec<_>, Vec<_>) = instances
        .iter()
        .map(|instance| enrich(official_domain, instance))
        .partition(|enriched| enriched.official_computed);

    official.sort_by(overview_order);
    community.sort_by(overview_order);

    (official, community)
}

pub fn overview(official_domain: &str, snapshot: &Snapshot) -> OverviewView {
    let (official, community) = aggregate(official_domain, &snapshot.data);

    OverviewView {
        official,
        community,
        last_updated_utc: snapshot.last_updated_utc.clone(),
    }
}
