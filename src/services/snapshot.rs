//! File-backed loading of health-check data

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, instrument};

use crate::errors::Result;
use crate::models::instance::{Instance, Snapshot};
use crate::services::format::{fmt_time, iso_utc};

/// Parsed JSON file contents stamped with the file's modification time
#[derive(Debug, Clone, Serialize)]
pub struct Stamped<T> {
    #[serde(rename = "lastUpdatedUTC")]
    pub last_updated_utc: String,
    pub data: T,
}

/// Modification time of `path` as ISO-8601 UTC.
pub async fn modified_utc(path: &Path) -> Result<String> {
    let modified = tokio::fs::metadata(path).await?.modified()?;
    Ok(iso_utc(DateTime::<Utc>::from(modified)))
}

/// Read and parse a JSON file along with its modification time.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn read_stamped<T: DeserializeOwned>(path: &Path) -> Result<Stamped<T>> {
    let raw = tokio::fs::read(path).await?;
    let last_updated_utc = modified_utc(path).await?;
    let data = serde_json::from_slice(&raw)?;

    debug!(bytes = raw.len(), updated = %fmt_time(&last_updated_utc), "Loaded JSON file");

    Ok(Stamped {
        last_updated_utc,
        data,
    })
}

/// Load the current health-check results.
pub async fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let stamped: Stamped<Vec<Instance>> = read_stamped(path).await?;
    debug!(instances = stamped.data.len(), "Snapshot ready");

    Ok(Snapshot {
        last_updated_utc: stamped.last_updated_utc,
        data: stamped.data,
    })
}

/// Raw file body, served without re-encoding.
pub async fn read_raw(path: &Path) -> Result<Vec<u8>> {
    Ok(tokio::fs::read(path).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DirectoryError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_snapshot() {
        let file = write_file(
            r#"[
                {"protocol": "https", "api": "a.imput.net", "frontend": "cobalt.tools",
                 "tests": {"youtube": {"status": true, "message": "ok", "friendly": "YouTube"}}},
                {"protocol": "http", "api": "b.example.com", "frontend": "", "online": false, "tests": {}}
            ]"#,
        );

        let snapshot = load_snapshot(file.path()).await.unwrap();
        assert_eq!(snapshot.data.len(), 2);
        assert_eq!(snapshot.data[0].tests["youtube"].friendly.as_deref(), Some("YouTube"));
        assert!(!snapshot.data[1].is_online());

        assert!(snapshot.last_updated_utc.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&snapshot.last_updated_utc).is_ok());
    }

    #[tokio::test]
    async fn test_null_fields_load_as_defaults() {
        let file = write_file(
            r#"[
                {"protocol": "https", "api": "a.example.com", "frontend": null, "tests": null},
                {"protocol": "https", "api": "b.example.com", "frontend": "b.com",
                 "tests": {"youtube": {"status": true, "message": null}}}
            ]"#,
        );

        let snapshot = load_snapshot(file.path()).await.unwrap();
        assert_eq!(snapshot.data[0].frontend, "");
        assert!(snapshot.data[0].tests.is_empty());
        assert_eq!(snapshot.data[1].tests["youtube"].message, "");
        assert!(snapshot.data[1].tests["youtube"].status);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_snapshot(&dir.path().join("absent.json")).await;
        assert!(matches!(result, Err(DirectoryError::Io(_))));
    }

    #[tokio::test]
    async fn test_malformed_file_is_json_error() {
        let file = write_file(r#"{"not": "a list"}"#);
        let result = load_snapshot(file.path()).await;
        assert!(matches!(result, Err(DirectoryError::Json(_))));
    }

    #[tokio::test]
    async fn test_read_stamped_value() {
        let file = write_file(r#"["a.example.com", "b.example.com"]"#);
        let stamped: Stamped<serde_json::Value> = read_stamped(file.path()).await.unwrap();
        assert_eq!(stamped.data[1], "b.example.com");

        let wire = serde_json::to_value(&stamped).unwrap();
        assert!(wire.get("lastUpdatedUTC").is_some());
    }
}
