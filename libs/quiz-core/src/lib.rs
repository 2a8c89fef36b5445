//! Core quiz library shared by the backend (and any future shells).
//!
//! Provides:
//! - CSV row splitting for published-spreadsheet exports
//! - Question ingestion with worksheet filtering and sample fallback data
//! - Master-sheet config and leaderboard ingestion
//! - Edit-distance similarity and the spelling/meaning graders
//! - Session score/streak bookkeeping
//!
//! Everything here is pure and synchronous; fetching the CSV text is the
//! caller's concern.

pub mod config;
pub mod csv;
pub mod grading;
pub mod matching;
pub mod questions;
pub mod samples;
pub mod session;
pub mod types;

pub use config::{apply_config, parse_leaderboard, parse_topic_configs};
pub use csv::{split_plain_line, split_quoted_line};
pub use grading::{grade_meaning, grade_spelling};
pub use matching::{levenshtein_distance, similarity};
pub use questions::{parse_questions, parse_questions_with_stats, IngestStats};
pub use session::{SessionStats, CORRECT_POINTS, PARTIAL_POINTS};
pub use types::{
    Answer, AnswerLetter, Difficulty, Feedback, LeaderboardEntry, MeaningWord, Question,
    SpellWord, Topic, TopicConfig, Verdict,
};
