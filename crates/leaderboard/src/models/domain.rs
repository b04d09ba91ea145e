use super::document::{Column, ColumnFormat};
use crate::LeaderboardError;

/// Commit message used when publishing the gold leaderboard.
/// The timestamp command searches history for this exact text.
pub const GOLD_COMMIT_MARKER: &str = "Update gold leaderboard";
pub const COINFLIPS_COMMIT_MARKER: &str = "Update coinflips leaderboard";
pub const DUELS_COMMIT_MARKER: &str = "Update duels leaderboard";
pub const WATCHTIME_COMMIT_MARKER: &str = "Update watchtime leaderboard";
/// Commit message used when publishing the marbles leaderboard.
/// The timestamp command searches history for this exact text.
pub const MARBLES_COMMIT_MARKER: &str = "Update marbles leaderboard";

const LEADERBOARD_DIR: &str = "public/api/leaderboards";

/// The statistic domains that each produce one leaderboard file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Gold,
    Coinflips,
    Duels,
    Watchtime,
    Marbles,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Coinflips => "coinflips",
            Self::Duels => "duels",
            Self::Watchtime => "watchtime",
            Self::Marbles => "marbles",
        }
    }

    /// All domains in publishing order.
    pub fn all() -> &'static [Domain] {
        &[
            Self::Gold,
            Self::Coinflips,
            Self::Duels,
            Self::Watchtime,
            Self::Marbles,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Gold => "GOLD",
            Self::Coinflips => "COINFLIPS",
            Self::Duels => "DUELLE",
            Self::Watchtime => "WATCHTIME",
            Self::Marbles => "MARBLES",
        }
    }

    fn file_stem(&self) -> &'static str {
        match self {
            Self::Duels => "duelle",
            other => other.as_str(),
        }
    }

    /// Repository-relative path of the published document.
    pub fn file_path(&self) -> String {
        format!("{}/{}.json", LEADERBOARD_DIR, self.file_stem())
    }

    pub fn commit_message(&self) -> &'static str {
        match self {
            Self::Gold => GOLD_COMMIT_MARKER,
            Self::Coinflips => COINFLIPS_COMMIT_MARKER,
            Self::Duels => DUELS_COMMIT_MARKER,
            Self::Watchtime => WATCHTIME_COMMIT_MARKER,
            Self::Marbles => MARBLES_COMMIT_MARKER,
        }
    }

    pub fn default_sort_column(&self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Watchtime => "Watchtime",
            Self::Coinflips | Self::Duels | Self::Marbles => "Gesamt",
        }
    }

    pub fn columns(&self) -> Vec<Column> {
        match self {
            Self::Gold => vec![Column::number("Gold", "Gold")],
            Self::Watchtime => vec![Column::new("Watchtime", "Watchtime", ColumnFormat::Time)],
            Self::Coinflips | Self::Duels => vec![
                Column::number("Gesamt", "Gesamt"),
                Column::number("Gewonnen", "Gewonnen"),
                Column::number("Verloren", "Verloren"),
            ],
            Self::Marbles => vec![
                Column::number("Gesamt", "Gesamt"),
                Column::number("Wins", "Wins"),
                Column::number("Eliminations", "Eliminations"),
                Column::number("Points", "Points"),
                Column::number("SeasonPoints", "Season Points"),
            ],
        }
    }

    fn parse_str(s: &str) -> Result<Self, LeaderboardError> {
        match s.trim().to_lowercase().as_str() {
            "gold" | "points" => Ok(Self::Gold),
            "coinflips" | "coinflip" => Ok(Self::Coinflips),
            "duels" | "duel" | "duelle" => Ok(Self::Duels),
            "watchtime" => Ok(Self::Watchtime),
            "marbles" => Ok(Self::Marbles),
            _ => Err(LeaderboardError::UnknownDomain(format!(
                "'{}'. Available: {}",
                s,
                Self::all()
                    .iter()
                    .map(|d| d.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

impl TryFrom<&str> for Domain {
    type Error = LeaderboardError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_str(value)
    }
}

impl std::str::FromStr for Domain {
    type Err = LeaderboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
