pub mod error;
pub mod formatter;
pub mod marbles;
pub mod models;

pub use error::{LeaderboardError, Result};
pub use models::{
    Column, ColumnFormat, DocumentConfig, Domain, LeaderboardDocument, MarbleRecord,
    PointsProfile, Row, UserVariable,
};
