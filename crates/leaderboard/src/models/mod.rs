pub mod document;
pub mod domain;
pub mod stats;

pub use document::{Column, ColumnFormat, DocumentConfig, LeaderboardDocument, Row};
pub use domain::{
    COINFLIPS_COMMIT_MARKER, DUELS_COMMIT_MARKER, Domain, GOLD_COMMIT_MARKER,
    MARBLES_COMMIT_MARKER, WATCHTIME_COMMIT_MARKER,
};
pub use stats::{DuelStats, GamblingStats, MarbleRecord, PointsProfile, UserVariable};
