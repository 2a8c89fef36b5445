//! API request/response types.

use serde::{Deserialize, Serialize};

// Re-export shared types from quiz-core
pub use quiz_core::types::{
    Difficulty, Feedback, LeaderboardEntry, MeaningWord, Question, SpellWord, Topic, TopicConfig,
    Verdict,
};

/// GET /api/topics
#[derive(Debug, Serialize)]
pub struct TopicListResponse {
    pub topics: Vec<Topic>,
}

/// GET /api/topics/{id}/questions
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub topic_id: String,
    pub count: usize,
    pub questions: Vec<Question>,
}

/// GET /api/leaderboard
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
}

/// A spell word as served to clients, with the fill-in-the-blanks pattern
/// always materialized (authored or derived).
#[derive(Debug, Serialize)]
pub struct SpellWordItem {
    pub id: u32,
    pub word: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub hint: String,
    pub fill_in_blank: String,
}

impl From<SpellWord> for SpellWordItem {
    fn from(word: SpellWord) -> Self {
        let fill_in_blank = word.fill_in_pattern();
        Self {
            id: word.id,
            word: word.word,
            difficulty: word.difficulty,
            category: word.category,
            hint: word.hint,
            fill_in_blank,
        }
    }
}

/// GET /api/spell/words
#[derive(Debug, Serialize)]
pub struct SpellWordListResponse {
    pub words: Vec<SpellWordItem>,
}

/// GET /api/spell/meanings
#[derive(Debug, Serialize)]
pub struct MeaningWordListResponse {
    pub words: Vec<MeaningWord>,
}

/// POST /api/grade/spelling
#[derive(Debug, Deserialize)]
pub struct GradeSpellingRequest {
    pub word_id: u32,
    pub answer: String,
}

/// POST /api/grade/meaning
#[derive(Debug, Deserialize)]
pub struct GradeMeaningRequest {
    pub word_id: u32,
    pub answer: String,
}
