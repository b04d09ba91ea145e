use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A per-user variable as held by the streaming host.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVariable {
    pub user_name: String,
    pub user_login: String,
    #[serde(default)]
    pub value: Value,
}

impl UserVariable {
    pub fn new(user_name: impl Into<String>, user_login: impl Into<String>, value: Value) -> Self {
        Self {
            user_name: user_name.into(),
            user_login: user_login.into(),
            value,
        }
    }

    /// The value as an integer. Integer strings are accepted since some
    /// hosts persist counters as text.
    pub fn as_integer(&self) -> Option<i64> {
        match &self.value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GamblingStats {
    pub total: i64,
    pub wins: i64,
    pub losses: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DuelStats {
    pub total: i64,
    pub won: i64,
    pub lost: i64,
}

/// The points-system blob stored per user. Sections the user never touched
/// are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PointsProfile {
    #[serde(default)]
    pub gambling: Option<GamblingStats>,
    #[serde(default)]
    pub duels: Option<DuelStats>,
}

impl PointsProfile {
    /// Reads the profile from either a JSON object or JSON text.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(serde_json::from_str(text)?),
            other => Ok(Self::deserialize(other)?),
        }
    }
}

/// One row of the marble-racing stats export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarbleRecord {
    pub name: String,
    pub wins: String,
    pub points: String,
    pub season_points: String,
    pub eliminations: String,
    pub total_races: String,
}

impl MarbleRecord {
    pub fn login(&self) -> String {
        self.name.to_lowercase()
    }
}
