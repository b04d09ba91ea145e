//! Turns raw host statistics into leaderboard documents.
//!
//! Entries that cannot be read are skipped with a warning so one broken user
//! never blocks the rest of the board.

use crate::models::{Domain, LeaderboardDocument, MarbleRecord, PointsProfile, Row, UserVariable};
use tracing::warn;

pub fn gold(entries: &[UserVariable]) -> LeaderboardDocument {
    counter_board(Domain::Gold, entries)
}

pub fn watchtime(entries: &[UserVariable]) -> LeaderboardDocument {
    counter_board(Domain::Watchtime, entries)
}

/// Coinflip records from the `gambling` section of each points profile.
/// Users who never flipped are left out.
pub fn coinflips(entries: &[UserVariable]) -> LeaderboardDocument {
    let rows = profiles(Domain::Coinflips, entries)
        .filter_map(|(entry, profile)| {
            let stats = profile.gambling?;
            (stats.total > 0)
                .then(|| record_row(entry, stats.total, stats.wins, stats.losses))
        })
        .collect();

    LeaderboardDocument::new(Domain::Coinflips, rows)
}

/// Duel records from the `duels` section of each points profile.
/// Users who never dueled are left out.
pub fn duels(entries: &[UserVariable]) -> LeaderboardDocument {
    let rows = profiles(Domain::Duels, entries)
        .filter_map(|(entry, profile)| {
            let stats = profile.duels?;
            (stats.total > 0).then(|| record_row(entry, stats.total, stats.won, stats.lost))
        })
        .collect();

    LeaderboardDocument::new(Domain::Duels, rows)
}

pub fn marbles(records: &[MarbleRecord]) -> LeaderboardDocument {
    let rows = records
        .iter()
        .map(|record| {
            Row::new(record.name.clone(), record.login())
                .with("Gesamt", &record.total_races)
                .with("Wins", &record.wins)
                .with("Eliminations", &record.eliminations)
                .with("Points", &record.points)
                .with("SeasonPoints", &record.season_points)
        })
        .collect();

    LeaderboardDocument::new(Domain::Marbles, rows)
}

fn counter_board(domain: Domain, entries: &[UserVariable]) -> LeaderboardDocument {
    let column = domain.default_sort_column();
    let rows = entries
        .iter()
        .filter_map(|entry| match entry.as_integer() {
            Some(value) => Some(Row::new(&entry.user_name, &entry.user_login).with(column, value)),
            None => {
                warn!(
                    "Skipping {} entry for {}: '{}' is not an integer",
                    domain, entry.user_name, entry.value
                );
                None
            }
        })
        .collect();

    LeaderboardDocument::new(domain, rows)
}

fn profiles(
    domain: Domain,
    entries: &[UserVariable],
) -> impl Iterator<Item = (&UserVariable, PointsProfile)> {
    entries
        .iter()
        .filter_map(move |entry| match PointsProfile::from_value(&entry.value) {
            Ok(profile) => Some((entry, profile)),
            Err(e) => {
                warn!(
                    "Failed to parse {} data for {}: {}",
                    domain, entry.user_name, e
                );
                None
            }
        })
}

fn record_row(entry: &UserVariable, total: i64, won: i64, lost: i64) -> Row {
    Row::new(&entry.user_name, &entry.user_login)
        .with("Gesamt", total)
        .with("Gewonnen", won)
        .with("Verloren", lost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn var(login: &str, value: Value) -> UserVariable {
        let mut name = login.to_string();
        name[..1].make_ascii_uppercase();
        UserVariable::new(name, login, value)
    }

    fn logins(doc: &LeaderboardDocument) -> Vec<&str> {
        doc.data.iter().map(|r| r.user_login.as_str()).collect()
    }

    #[test]
    fn test_gold_example() {
        let doc = gold(&[var("alice", json!(50)), var("bob", json!(100))]);

        assert_eq!(logins(&doc), vec!["bob", "alice"]);
        assert_eq!(doc.data[0].get("Gold"), Some("100"));
        assert_eq!(doc.data[1].get("Gold"), Some("50"));
        assert_eq!(doc.data[0].user_name, "Bob");
        assert_eq!(doc.config.display_name, "GOLD");
    }

    #[test]
    fn test_gold_skips_non_integer_values() {
        let doc = gold(&[
            var("alice", json!("lots")),
            var("bob", json!(7)),
            var("carol", json!(null)),
        ]);

        assert_eq!(logins(&doc), vec!["bob"]);
    }

    #[test]
    fn test_watchtime_keeps_zero_values() {
        let doc = watchtime(&[var("alice", json!(0)), var("bob", json!(120))]);

        assert_eq!(logins(&doc), vec!["bob", "alice"]);
        assert_eq!(doc.data[1].get("Watchtime"), Some("0"));
        assert_eq!(doc.config.default_sort_column, "Watchtime");
    }

    #[test]
    fn test_coinflips_rows() {
        let doc = coinflips(&[
            var(
                "alice",
                json!(r#"{"gambling": {"total": 3, "wins": 1, "losses": 2}}"#),
            ),
            var(
                "bob",
                json!({"gambling": {"total": 10, "wins": 6, "losses": 4}}),
            ),
        ]);

        assert_eq!(logins(&doc), vec!["bob", "alice"]);
        let bob = &doc.data[0];
        assert_eq!(bob.get("Gesamt"), Some("10"));
        assert_eq!(bob.get("Gewonnen"), Some("6"));
        assert_eq!(bob.get("Verloren"), Some("4"));
    }

    #[test]
    fn test_coinflips_drop_inactive_and_malformed() {
        let doc = coinflips(&[
            var("zero", json!({"gambling": {"total": 0, "wins": 0, "losses": 0}})),
            var("broken", json!("{not json")),
            var("duelist", json!({"duels": {"total": 5, "won": 5, "lost": 0}})),
            var("player", json!({"gambling": {"total": 1, "wins": 1}})),
        ]);

        assert_eq!(logins(&doc), vec!["player"]);
        assert_eq!(doc.data[0].get("Verloren"), Some("0"));
    }

    #[test]
    fn test_duel_with_zero_total_is_excluded() {
        let doc = duels(&[
            var("carol", json!({"duels": {"total": 0, "won": 0, "lost": 0}})),
            var("dave", json!({"duels": {"total": 2, "won": 1, "lost": 1}})),
        ]);

        assert_eq!(logins(&doc), vec!["dave"]);
        assert_eq!(doc.config.display_name, "DUELLE");
    }

    #[test]
    fn test_all_zero_input_yields_empty_board() {
        let doc = duels(&[
            var("carol", json!({"duels": {"total": 0}})),
            var("erin", json!({"gambling": {"total": 9}})),
        ]);

        assert!(doc.is_empty());
        assert_eq!(doc.config.columns.len(), 3);
    }

    #[test]
    fn test_duel_ties_keep_input_order() {
        let doc = duels(&[
            var("a", json!({"duels": {"total": 4}})),
            var("b", json!({"duels": {"total": 9}})),
            var("c", json!({"duels": {"total": 4}})),
            var("d", json!({"duels": {"total": 4}})),
        ]);

        assert_eq!(logins(&doc), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_marbles_rows() {
        let record = |name: &str, races: &str| MarbleRecord {
            name: name.to_string(),
            wins: "2".to_string(),
            points: "150".to_string(),
            season_points: "40".to_string(),
            eliminations: "1".to_string(),
            total_races: races.to_string(),
        };

        let doc = marbles(&[record("Speedy", "8"), record("MarbleKing", "21")]);

        assert_eq!(logins(&doc), vec!["marbleking", "speedy"]);
        let king = &doc.data[0];
        assert_eq!(king.user_name, "MarbleKing");
        assert_eq!(king.get("Gesamt"), Some("21"));
        assert_eq!(king.get("SeasonPoints"), Some("40"));
        assert_eq!(doc.config.columns[4].label, "Season Points");
    }
}
