use crate::Result;
use leaderboard::MarbleRecord;
use leaderboard::marbles::parse_stats_csv;
use std::io::ErrorKind;
use std::path::Path;

/// Default location of the marble-racing export, relative to the working directory.
pub const DEFAULT_STATS_CSV: &str = "Marbles/Stats.csv";

/// Reads the marbles export. `None` when the file does not exist or has no
/// rows after the header.
pub async fn read_marble_records(path: &Path) -> Result<Option<Vec<MarbleRecord>>> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("Marbles CSV file not found at: {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    tracing::debug!("Read marbles CSV: {} ({} bytes)", path.display(), content.len());
    Ok(parse_stats_csv(&content))
}
