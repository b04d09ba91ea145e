use crate::traits::UserVariableStore;
use crate::{PublisherError, Result};
use leaderboard::UserVariable;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Reads user variables from a JSON export of the host's variable store:
///
/// ```json
/// {
///   "points": [
///     { "userName": "Alice", "userLogin": "alice", "value": 50 }
///   ]
/// }
/// ```
///
/// The file is re-read on every lookup so each run sees the latest export.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<HashMap<String, Value>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            PublisherError::StoreError(format!(
                "Cannot read variable export {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait::async_trait]
impl UserVariableStore for JsonFileStore {
    async fn user_variables(&self, name: &str) -> Result<Vec<UserVariable>> {
        let mut variables = self.load().await?;

        let entries = match variables.remove(name) {
            Some(Value::Array(entries)) => entries,
            Some(Value::Null) | None => return Ok(Vec::new()),
            Some(other) => {
                warn!(
                    "Variable '{}' in {} is not a list (found {})",
                    name,
                    self.path.display(),
                    other
                );
                return Ok(Vec::new());
            }
        };

        Ok(entries
            .into_iter()
            .enumerate()
            .filter_map(|(idx, entry)| match UserVariable::deserialize(&entry) {
                Ok(variable) => Some(variable),
                Err(e) => {
                    warn!("Skipping entry {} of variable '{}': {}", idx, name, e);
                    None
                }
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "json-file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn export(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_reads_variables() {
        let file = export(
            r#"{
                "points": [
                    {"userName": "Alice", "userLogin": "alice", "value": 50},
                    {"userName": "Bob", "userLogin": "bob", "value": 100}
                ],
                "tawmae_data_TWITCH POINTS": [
                    {"userName": "Carol", "userLogin": "carol",
                     "value": "{\"duels\": {\"total\": 0}}"}
                ]
            }"#,
        );
        let store = JsonFileStore::new(file.path());

        let points = store.user_variables("points").await.unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], UserVariable::new("Alice", "alice", json!(50)));

        let profiles = store
            .user_variables("tawmae_data_TWITCH POINTS")
            .await
            .unwrap();
        assert_eq!(profiles[0].value, json!("{\"duels\": {\"total\": 0}}"));
    }

    #[tokio::test]
    async fn test_unknown_variable_is_empty() {
        let file = export(r#"{"points": [], "watchtime": null}"#);
        let store = JsonFileStore::new(file.path());

        assert!(store.user_variables("points").await.unwrap().is_empty());
        assert!(store.user_variables("watchtime").await.unwrap().is_empty());
        assert!(store.user_variables("missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_entries_are_skipped() {
        let file = export(
            r#"{"points": [
                {"userLogin": "nameless", "value": 1},
                "just a string",
                {"userName": "Dave", "userLogin": "dave"}
            ]}"#,
        );
        let store = JsonFileStore::new(file.path());

        let points = store.user_variables("points").await.unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].user_login, "dave");
        assert_eq!(points[0].value, Value::Null);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope.json"));

        assert!(matches!(
            store.user_variables("points").await,
            Err(PublisherError::StoreError(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_json_is_an_error() {
        let file = export("{not json");
        let store = JsonFileStore::new(file.path());

        assert!(matches!(
            store.user_variables("points").await,
            Err(PublisherError::ParseError(_))
        ));
    }
}
