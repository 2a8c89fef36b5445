//! Spelling grader for the audio spelling challenge.

use crate::matching::similarity;
use crate::types::{Feedback, Verdict};

use super::random_correct_message;

/// Similarity above which a wrong answer still counts as a near miss.
const CLOSE_THRESHOLD: f64 = 0.7;

/// Grade a typed spelling attempt against the canonical word.
///
/// Both sides are trimmed and lower-cased. An exact match is `Correct`;
/// anything scoring above [`CLOSE_THRESHOLD`] is `Close` (still wrong);
/// everything else is `Incorrect`. Never fails, including on empty input.
pub fn grade_spelling(input: &str, word: &str) -> Feedback {
    let attempt = input.trim().to_lowercase();
    let canonical = word.trim().to_lowercase();

    if attempt == canonical {
        return Feedback {
            verdict: Verdict::Correct,
            message: random_correct_message(),
            correct_answer: Some(word.to_string()),
            correct_meaning: None,
            user_answer: None,
            matched_concepts: Vec::new(),
        };
    }

    if similarity(&attempt, &canonical) > CLOSE_THRESHOLD {
        return Feedback {
            verdict: Verdict::Close,
            message: "So close! Check your spelling.".to_string(),
            correct_answer: Some(word.to_string()),
            correct_meaning: None,
            user_answer: Some(attempt),
            matched_concepts: Vec::new(),
        };
    }

    Feedback {
        verdict: Verdict::Incorrect,
        message: "Let's learn this word!".to_string(),
        correct_answer: Some(word.to_string()),
        correct_meaning: None,
        user_answer: None,
        matched_concepts: Vec::new(),
    }
}
