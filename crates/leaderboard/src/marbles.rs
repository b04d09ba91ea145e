//! Parser for the marble-racing `Stats.csv` export.
//!
//! The file is a header line followed by plain comma-separated rows:
//! `name, <unused>, wins, points, season points, eliminations, total races, ...`.
//! Quoted fields are not supported.

use crate::models::MarbleRecord;
use tracing::warn;

const MIN_FIELDS: usize = 7;

/// Parses every data row, skipping rows that are too short or whose race
/// count is not an integer.
///
/// `None` when the file has no lines after the header. A file whose rows are
/// all skipped still yields `Some` with no records.
pub fn parse_stats_csv(content: &str) -> Option<Vec<MarbleRecord>> {
    let mut lines = content.lines().enumerate().skip(1).peekable();
    lines.peek()?;

    Some(
        lines
            .filter_map(|(line_number, line)| parse_line(line_number, line))
            .collect(),
    )
}

fn parse_line(line_number: usize, line: &str) -> Option<MarbleRecord> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();

    if parts.len() < MIN_FIELDS {
        warn!("Skipping invalid line {}: {}", line_number, line);
        return None;
    }

    if parts[6].parse::<i64>().is_err() {
        warn!(
            "Skipping line {}: total races '{}' is not a number",
            line_number, parts[6]
        );
        return None;
    }

    Some(MarbleRecord {
        name: parts[0].to_string(),
        wins: parts[2].to_string(),
        points: parts[3].to_string(),
        season_points: parts[4].to_string(),
        eliminations: parts[5].to_string(),
        total_races: parts[6].to_string(),
    })
}
