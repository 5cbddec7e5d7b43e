use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Checks keyed by name, in the order the checker wrote them
pub type Checks = IndexMap<String, ServiceResult>;

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One named health check result
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ServiceResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: bool,
}

impl ServiceResult {
    /// Display label, falling back to the check key
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.friendly.as_deref().unwrap_or(key)
    }
}

/// One monitored deployment as written by the checker
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub protocol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub api: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub frontend: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tests: Checks,
}

impl Instance {
    /// Only an explicit `false` marks an instance offline
    pub fn is_online(&self) -> bool {
        self.online != Some(false)
    }
}

/// Health-check data as loaded from disk, stamped with the file's mtime
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Snapshot {
    #[serde(rename = "lastUpdatedUTC")]
    pub last_updated_utc: String,
    pub data: Vec<Instance>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_optional_fields_take_defaults() {
        let instance: Instance = serde_json::from_value(json!({
            "protocol": "https",
            "api": "api.example.com",
            "frontend": "example.com",
            "tests": {
                "youtube": { "status": true },
                "tiktok": { "message": "timed out" }
            }
        }))
        .unwrap();

        assert!(instance.is_online());
        assert!(instance.version.is_none());
        assert!(instance.start_time.is_none());

        let youtube = &instance.tests["youtube"];
        assert!(youtube.status);
        assert_eq!(youtube.message, "");
        assert_eq!(youtube.display_name("youtube"), "youtube");

        let tiktok = &instance.tests["tiktok"];
        assert!(!tiktok.status);
        assert_eq!(tiktok.message, "timed out");
    }

    #[test]
    fn test_online_defaults_to_true_unless_false() {
        let mut instance = Instance::default();
        assert!(instance.is_online());

        instance.online = Some(true);
        assert!(instance.is_online());

        instance.online = Some(false);
        assert!(!instance.is_online());
    }

    #[test]
    fn test_camel_case_wire_names() {
        let instance: Instance = serde_json::from_value(json!({
            "api": "a.example.com",
            "startTime": 1700000000000i64,
            "online": null
        }))
        .unwrap();
        assert_eq!(instance.start_time, Some(1_700_000_000_000));
        assert!(instance.is_online());

        let value = serde_json::to_value(&instance).unwrap();
        assert_eq!(value["startTime"], json!(1_700_000_000_000i64));
        assert!(value.get("online").is_none());
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let instances: Vec<Instance> = serde_json::from_str(
            r#"[
                {"protocol": null, "api": null, "frontend": null, "tests": null},
                {"api": "a.example.com", "frontend": null,
                 "tests": {"youtube": {"status": null, "message": null, "friendly": null}}}
            ]"#,
        )
        .unwrap();

        assert_eq!(instances[0].api, "");
        assert_eq!(instances[0].frontend, "");
        assert!(instances[0].tests.is_empty());

        let youtube = &instances[1].tests["youtube"];
        assert!(!youtube.status);
        assert_eq!(youtube.message, "");
        assert_eq!(youtube.display_name("youtube"), "youtube");
    }

    #[test]
    fn test_checks_keep_source_order() {
        let instance: Instance = serde_json::from_str(
            r#"{"tests": {"zeta": {}, "frontend": {}, "alpha": {}, "Frontend": {}}}"#,
        )
        .unwrap();

        let keys: Vec<_> = instance.tests.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "frontend", "alpha", "Frontend"]);
    }

    #[test]
    fn test_friendly_name_wins() {
        let result = ServiceResult {
            friendly: Some("YouTube".to_string()),
            ..Default::default()
        };
        assert_eq!(result.display_name("youtube"), "YouTube");
    }
}
