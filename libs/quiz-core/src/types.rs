//! Core types for quiz content and grading.

use serde::{Deserialize, Serialize};

/// Identifying letter of a multiple-choice option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    /// All four letters in option order.
    pub const ALL: [AnswerLetter; 4] = [Self::A, Self::B, Self::C, Self::D];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl Default for AnswerLetter {
    fn default() -> Self {
        Self::A
    }
}

/// One multiple-choice option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerLetter,
    pub text: String,
}

/// A multiple-choice question parsed from a sheet row (or sample data).
///
/// Always carries exactly four answer options; `correct_answer` is the
/// letter of one of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub know_more_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub know_more_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub answers: Vec<Answer>,
    pub correct_answer: AnswerLetter,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worksheet_number: Option<u32>,
}

/// Difficulty tier used by topics and the spell/meaning word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// A quiz topic with its content source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub difficulty: Difficulty,
    pub total: u32,
    /// Published-sheet URL, or a `PLACEHOLDER_*` sentinel when unconfigured.
    pub sheet_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worksheet_number: Option<u32>,
    /// Worksheet tab GID for single-sheet-multiple-tabs setups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worksheet_gid: Option<String>,
}

/// One row of the master configuration sheet.
///
/// All fields are carried verbatim as strings; `worksheet_no` is converted
/// to an integer only at the point of use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicConfig {
    pub topic: String,
    pub link: String,
    pub worksheet_no: String,
    pub tab_name: String,
    pub difficulty: String,
}

impl TopicConfig {
    /// Whether the row points at a real sheet. `"TBA"` (and an empty link)
    /// mean "not yet configured".
    pub fn is_configured(&self) -> bool {
        !self.link.is_empty() && self.link != "TBA"
    }
}

/// One leaderboard row from the master sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub quizzes: u32,
    pub stars: u32,
    pub streaks: u32,
}

/// A word for the spelling-by-audio mini-game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellWord {
    pub id: u32,
    pub word: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub hint: String,
    /// Authored display pattern with letters masked out, e.g. `ele____t`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_in_blank: Option<String>,
}

impl SpellWord {
    /// The fill-in-the-blanks pattern: the authored one when present,
    /// otherwise derived from the word itself.
    pub fn fill_in_pattern(&self) -> String {
        self.fill_in_blank
            .clone()
            .unwrap_or_else(|| mask_word(&self.word))
    }
}

/// Mask the middle of a word for fill-in-the-blanks display, keeping a
/// short prefix and the final letter: `elephant` -> `ele____t`.
pub fn mask_word(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    if n < 3 {
        return "_".repeat(n);
    }
    let prefix = usize::min(3, n / 2);
    let mut masked: String = chars[..prefix].iter().collect();
    for _ in prefix..n - 1 {
        masked.push('_');
    }
    masked.push(chars[n - 1]);
    masked
}

/// A word for the meaning-explanation mini-game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeaningWord {
    pub id: u32,
    pub word: String,
    /// Canonical meaning sentence shown back to the player.
    pub meaning: String,
    /// Concept keywords checked by substring containment.
    pub keywords: Vec<String>,
    /// Synonyms; any one appearing in the answer makes it correct.
    pub synonyms: Vec<String>,
    pub example: String,
    pub difficulty: Difficulty,
}

/// Classification outcome of a grading call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    /// Near-miss spelling; still counts as wrong.
    Close,
    /// Partially right meaning; earns partial credit.
    Partial,
    Incorrect,
}

/// Per-submission grading result. Created on submit, discarded when the
/// player advances to the next item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub verdict: Verdict,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_meaning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<String>,
    /// Keywords and meaning tokens the answer actually touched. May contain
    /// duplicates; display layers truncate as they see fit.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub matched_concepts: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn answer_letter_order() {
        assert_eq!(AnswerLetter::ALL[1], AnswerLetter::B);
        assert_eq!(AnswerLetter::C.as_str(), "C");
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!(Difficulty::parse("Easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse("MEDIUM"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("bananas"), None);
    }

    #[test]
    fn mask_word_keeps_prefix_and_last_letter() {
        assert_eq!(mask_word("elephant"), "ele____t");
        assert_eq!(mask_word("word"), "wo_d");
        assert_eq!(mask_word("at"), "__");
    }

    #[test]
    fn authored_pattern_wins_over_derived() {
        let word = SpellWord {
            id: 1,
            word: "beautiful".to_string(),
            difficulty: Difficulty::Medium,
            category: "Adjectives".to_string(),
            hint: "Very pretty".to_string(),
            fill_in_blank: Some("beau____ul".to_string()),
        };
        assert_eq!(word.fill_in_pattern(), "beau____ul");
    }

    #[test]
    fn derived_pattern_when_unauthored() {
        let word = SpellWord {
            id: 2,
            word: "elephant".to_string(),
            difficulty: Difficulty::Easy,
            category: "Animals".to_string(),
            hint: "Long trunk".to_string(),
            fill_in_blank: None,
        };
        assert_eq!(word.fill_in_pattern(), "ele____t");
    }

    #[test]
    fn tba_link_is_unconfigured() {
        let config = TopicConfig {
            topic: "Math".to_string(),
            link: "TBA".to_string(),
            worksheet_no: "3".to_string(),
            tab_name: "Sheet1".to_string(),
            difficulty: "Hard".to_string(),
        };
        assert!(!config.is_configured());
    }
}
