//! Master-sheet ingestion: topic configuration and leaderboard rows.
//!
//! Both projections read the same CSV text with the same header-skip and
//! blank-skip rules, but split rows with the naive comma splitter; the
//! master sheet is assumed never to contain embedded commas.

use crate::csv::split_plain_line;
use crate::types::{LeaderboardEntry, Topic, TopicConfig};

/// Parse master-sheet rows into topic configurations.
///
/// Columns: `Topic, Link, Worksheet No, Tab Name, Difficulty`. Rows with
/// fewer than five fields are skipped. Never errors.
pub fn parse_topic_configs(csv_text: &str) -> Vec<TopicConfig> {
    let mut configs = Vec::new();

    for line in data_lines(csv_text) {
        let parts = split_plain_line(line);
        if parts.len() < 5 {
            continue;
        }
        configs.push(TopicConfig {
            topic: parts[0].clone(),
            link: parts[1].clone(),
            worksheet_no: parts[2].clone(),
            tab_name: parts[3].clone(),
            difficulty: parts[4].clone(),
        });
    }

    configs
}

/// Parse master-sheet rows into leaderboard entries.
///
/// Columns 5-8 carry `Name, Quizzes, Stars, Streaks`. Rows need at least
/// nine fields and a non-empty name; numeric fields default to 0 when they
/// fail to parse. Never errors.
pub fn parse_leaderboard(csv_text: &str) -> Vec<LeaderboardEntry> {
    let mut entries = Vec::new();

    for line in data_lines(csv_text) {
        let parts = split_plain_line(line);
        if parts.len() < 9 || parts[5].is_empty() {
            continue;
        }
        entries.push(LeaderboardEntry {
            name: parts[5].clone(),
            quizzes: parts[6].parse().unwrap_or(0),
            stars: parts[7].parse().unwrap_or(0),
            streaks: parts[8].parse().unwrap_or(0),
        });
    }

    entries
}

/// Overlay a master-sheet config row onto a built-in topic.
///
/// The row is matched by case-insensitive topic name. A configured link
/// replaces the sheet URL; the row's worksheet number is used when it
/// parses, otherwise the built-in number is kept. An unconfigured row
/// (`"TBA"` link) leaves the topic untouched.
pub fn apply_config(topic: &Topic, configs: &[TopicConfig]) -> Topic {
    let matched = configs
        .iter()
        .find(|c| c.topic.to_lowercase() == topic.name.to_lowercase());

    match matched {
        Some(config) if config.is_configured() => {
            let mut configured = topic.clone();
            configured.sheet_url = config.link.clone();
            configured.worksheet_number = config
                .worksheet_no
                .trim()
                .parse()
                .ok()
                .or(topic.worksheet_number);
            configured
        }
        _ => topic.clone(),
    }
}

/// Non-blank data lines of a CSV blob, header excluded.
fn data_lines(csv_text: &str) -> impl Iterator<Item = &str> {
    csv_text
        .trim()
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
}
