use super::domain::Domain;
use crate::Result;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnFormat {
    Number,
    Time,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Column {
    pub key: String,
    pub label: String,
    pub format: ColumnFormat,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>, format: ColumnFormat) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            format,
        }
    }

    pub fn number(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, ColumnFormat::Number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentConfig {
    pub display_name: String,
    pub columns: Vec<Column>,
    pub default_sort_column: String,
}

impl DocumentConfig {
    pub fn for_domain(domain: Domain) -> Self {
        Self {
            display_name: domain.display_name().to_string(),
            columns: domain.columns(),
            default_sort_column: domain.default_sort_column().to_string(),
        }
    }
}

const USER_NAME: &str = "UserName";
const USER_LOGIN: &str = "UserLogin";

/// One leaderboard entry. Every counter is kept as a decimal string because
/// the front-end reads them as text.
///
/// Values serialize in the order they were added, after `UserName` and
/// `UserLogin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub user_name: String,
    pub user_login: String,
    pub values: Vec<(String, String)>,
}

impl Row {
    pub fn new(user_name: impl Into<String>, user_login: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            user_login: user_login.into(),
            values: Vec::new(),
        }
    }

    /// Sets `key`, keeping its position if it is already present.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key.into(), value.to_string());
        self
    }

    fn set(&mut self, key: String, value: String) {
        match self.values.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.values.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Integer value of a column, `None` when missing or not an integer.
    pub fn numeric(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 2))?;
        map.serialize_entry(USER_NAME, &self.user_name)?;
        map.serialize_entry(USER_LOGIN, &self.user_login)?;
        for (key, value) in &self.values {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(RowVisitor)
    }
}

struct RowVisitor;

impl<'de> Visitor<'de> for RowVisitor {
    type Value = Row;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a leaderboard row with string values")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> std::result::Result<Row, M::Error> {
        let mut user_name = None;
        let mut user_login = None;
        let mut values = Vec::new();

        while let Some(key) = map.next_key::<String>()? {
            let value: String = map.next_value()?;
            match key.as_str() {
                USER_NAME => user_name = Some(value),
                USER_LOGIN => user_login = Some(value),
                _ => values.push((key, value)),
            }
        }

        let mut row = Row::new(
            user_name.ok_or_else(|| de::Error::missing_field(USER_NAME))?,
            user_login.ok_or_else(|| de::Error::missing_field(USER_LOGIN))?,
        );
        for (key, value) in values {
            row.set(key, value);
        }
        Ok(row)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LeaderboardDocument {
    pub config: DocumentConfig,
    pub data: Vec<Row>,
}

impl LeaderboardDocument {
    /// Builds the document for `domain`, ordering rows by the domain's default
    /// sort column, highest first. Rows with equal values keep their input
    /// order; rows whose value is not an integer go last.
    pub fn new(domain: Domain, mut rows: Vec<Row>) -> Self {
        let sort_key = domain.default_sort_column();
        rows.sort_by(|a, b| b.numeric(sort_key).cmp(&a.numeric(sort_key)));

        Self {
            config: DocumentConfig::for_domain(domain),
            data: rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gold_row(login: &str, gold: &str) -> Row {
        Row::new(login.to_uppercase(), login).with("Gold", gold)
    }

    #[test]
    fn test_rows_sorted_descending() {
        let doc = LeaderboardDocument::new(
            Domain::Gold,
            vec![
                gold_row("alice", "50"),
                gold_row("bob", "100"),
                gold_row("carol", "75"),
            ],
        );

        let logins: Vec<_> = doc.data.iter().map(|r| r.user_login.as_str()).collect();
        assert_eq!(logins, vec!["bob", "carol", "alice"]);
    }

    #[test]
    fn test_sort_is_numeric_not_lexical() {
        let doc = LeaderboardDocument::new(
            Domain::Gold,
            vec![gold_row("small", "9"), gold_row("large", "10")],
        );

        assert_eq!(doc.data[0].user_login, "large");
    }

    #[test]
    fn test_equal_values_keep_input_order() {
        let doc = LeaderboardDocument::new(
            Domain::Gold,
            vec![
                gold_row("first", "5"),
                gold_row("top", "8"),
                gold_row("second", "5"),
                gold_row("third", "5"),
            ],
        );

        let logins: Vec<_> = doc.data.iter().map(|r| r.user_login.as_str()).collect();
        assert_eq!(logins, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_unparsable_values_sort_last() {
        let doc = LeaderboardDocument::new(
            Domain::Gold,
            vec![gold_row("broken", "n/a"), gold_row("negative", "-3")],
        );

        assert_eq!(doc.data[0].user_login, "negative");
        assert_eq!(doc.data[1].user_login, "broken");
    }

    #[test]
    fn test_serialized_shape() {
        let doc = LeaderboardDocument::new(Domain::Watchtime, vec![
            Row::new("Alice", "alice").with("Watchtime", 3600),
        ]);

        let value: serde_json::Value =
            serde_json::from_str(&doc.to_json_pretty().unwrap()).unwrap();

        assert_eq!(value["config"]["displayName"], "WATCHTIME");
        assert_eq!(value["config"]["defaultSortColumn"], "Watchtime");
        assert_eq!(value["config"]["columns"][0]["format"], "time");
        assert_eq!(value["data"][0]["UserName"], "Alice");
        assert_eq!(value["data"][0]["UserLogin"], "alice");
        assert_eq!(value["data"][0]["Watchtime"], serde_json::json!("3600"));
    }

    #[test]
    fn test_json_round_trip_keeps_strings() {
        let doc = LeaderboardDocument::new(Domain::Marbles, vec![
            Row::new("Dave", "dave")
                .with("Gesamt", 12)
                .with("Wins", 3)
                .with("Eliminations", 1)
                .with("Points", 240)
                .with("SeasonPoints", 80),
        ]);

        let json = doc.to_json_pretty().unwrap();
        let parsed = LeaderboardDocument::from_json(&json).unwrap();

        assert_eq!(parsed, doc);
        assert_eq!(parsed.data[0].get("Points"), Some("240"));
    }

    #[test]
    fn test_values_keep_column_order() {
        let row = Row::new("Dave", "dave")
            .with("Gesamt", 12)
            .with("Wins", 3)
            .with("Eliminations", 1)
            .with("Points", 240)
            .with("SeasonPoints", 80);

        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"UserName":"Dave","UserLogin":"dave","Gesamt":"12","Wins":"3","Eliminations":"1","Points":"240","SeasonPoints":"80"}"#
        );
    }

    #[test]
    fn test_with_replaces_in_place() {
        let row = Row::new("A", "a").with("Wins", 1).with("Gesamt", 2).with("Wins", 5);

        assert_eq!(
            row.values,
            vec![
                ("Wins".to_string(), "5".to_string()),
                ("Gesamt".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_login_is_rejected() {
        let json = r#"{
            "config": {"displayName": "GOLD", "columns": [], "defaultSortColumn": "Gold"},
            "data": [{"UserName": "A", "Gold": "5"}]
        }"#;

        assert!(LeaderboardDocument::from_json(json).is_err());
    }

    #[test]
    fn test_native_numbers_are_rejected() {
        let json = r#"{
            "config": {"displayName": "GOLD", "columns": [], "defaultSortColumn": "Gold"},
            "data": [{"UserName": "A", "UserLogin": "a", "Gold": 5}]
        }"#;

        assert!(LeaderboardDocument::from_json(json).is_err());
    }
}
