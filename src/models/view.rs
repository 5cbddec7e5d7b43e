use serde::{Deserialize, Serialize};

use crate::models::instance::Instance;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub up: usize,
    pub total: usize,
}

/// Instance plus the fields computed for the overview page.
///
/// The wrapped instance's own `online` is cleared so the computed flag is the
/// only one on the wire.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedInstance {
    #[serde(flatten)]
    pub instance: Instance,
    pub id: Option<String>,
    pub totals: Totals,
    pub score_pct: u32,
    pub official_computed: bool,
    pub online: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverviewView {
    pub official: Vec<EnrichedInstance>,
    pub community: Vec<EnrichedInstance>,
    #[serde(rename = "lastUpdatedUTC")]
    pub last_updated_utc: String,
}

/// One check as shown on an instance page
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ServiceRow {
    pub key: String,
    pub friendly: String,
    pub status: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailInstance {
    #[serde(flatten)]
    pub instance: Instance,
    pub title_host: String,
    pub api_host: String,
    pub api_nick: Option<String>,
    pub services: Vec<ServiceRow>,
    pub online: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    pub not_found: bool,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<DetailInstance>,
    #[serde(rename = "lastUpdatedUTC")]
    pub last_updated_utc: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CatalogView {
    pub instances: Vec<Instance>,
    pub services: Vec<CatalogEntry>,
    #[serde(rename = "lastUpdatedUTC")]
    pub last_updated_utc: String,
}

/// One instance's result for a single check
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ServiceInstanceRow {
    pub id: Option<String>,
    pub api: String,
    pub frontend: String,
    pub protocol: String,
    pub status: bool,
    pub message: String,
    pub online: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceView {
    pub not_found: bool,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official: Option<Vec<ServiceInstanceRow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community: Option<Vec<ServiceInstanceRow>>,
    #[serde(rename = "lastUpdatedUTC")]
    pub last_updated_utc: String,
}
