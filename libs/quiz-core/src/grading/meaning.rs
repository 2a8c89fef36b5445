//! Meaning grader for the word-meaning challenge.
//!
//! Classification combines three signals against the canonical record:
//! synonym containment, keyword containment, and token overlap with the
//! meaning sentence. Substring containment is deliberately loose so that a
//! child writing "it makes you smile" matches the keyword "smile".

use crate::types::{Feedback, MeaningWord, Verdict};

/// Keyword/overlap ratio at or above which the answer is fully correct.
const CORRECT_THRESHOLD: f64 = 0.4;
/// Ratio at or above which the answer earns partial credit.
const PARTIAL_THRESHOLD: f64 = 0.2;
/// A genuine attempt of at least this many tokens earns partial credit
/// even without signal matches.
const ATTEMPT_TOKENS: usize = 3;

/// Grade a free-text meaning explanation against the canonical word record.
///
/// Never fails; empty input simply matches nothing and grades `Incorrect`.
pub fn grade_meaning(input: &str, word: &MeaningWord) -> Feedback {
    let answer = input.trim().to_lowercase();
    let user_tokens = tokenize(&answer, 2);

    let keyword_matches: Vec<String> = word
        .keywords
        .iter()
        .filter(|kw| answer.contains(&kw.to_lowercase()))
        .cloned()
        .collect();

    let synonym_match = word
        .synonyms
        .iter()
        .any(|syn| answer.contains(&syn.to_lowercase()));

    let meaning_tokens: Vec<String> = word
        .meaning
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() > 3)
        .map(str::to_string)
        .collect();

    // Bidirectional containment: a meaning token counts when some user
    // token contains it or is contained by it.
    let meaning_overlap: Vec<String> = meaning_tokens
        .iter()
        .filter(|mw| {
            user_tokens
                .iter()
                .any(|uw| uw.contains(mw.as_str()) || mw.contains(uw.as_str()))
        })
        .cloned()
        .collect();

    let keyword_score = keyword_matches.len() as f64 / word.keywords.len().max(1) as f64;
    let overlap_score = meaning_overlap.len() as f64 / meaning_tokens.len().max(1) as f64;

    // Concatenated, not deduplicated; display layers truncate for the UI.
    let matched_concepts: Vec<String> = keyword_matches
        .iter()
        .chain(meaning_overlap.iter())
        .cloned()
        .collect();

    if synonym_match || keyword_score >= CORRECT_THRESHOLD || overlap_score >= CORRECT_THRESHOLD {
        Feedback {
            verdict: Verdict::Correct,
            message: "Excellent! You understood!".to_string(),
            correct_answer: None,
            correct_meaning: Some(word.meaning.clone()),
            user_answer: None,
            matched_concepts,
        }
    } else if keyword_score >= PARTIAL_THRESHOLD
        || overlap_score >= PARTIAL_THRESHOLD
        || user_tokens.len() >= ATTEMPT_TOKENS
    {
        Feedback {
            verdict: Verdict::Partial,
            message: "You're on the right track!".to_string(),
            correct_answer: None,
            correct_meaning: Some(word.meaning.clone()),
            user_answer: None,
            matched_concepts,
        }
    } else {
        Feedback {
            verdict: Verdict::Incorrect,
            message: "Let's learn this word!".to_string(),
            correct_answer: None,
            correct_meaning: Some(word.meaning.clone()),
            user_answer: None,
            matched_concepts: Vec::new(),
        }
    }
}

/// Words of more than `min_len` chars after stripping `. , ! ? ' "`.
fn tokenize(text: &str, min_len: usize) -> Vec<String> {
    text.replace(['.', ',', '!', '?', '\'', '"'], "")
        .split_whitespace()
        .filter(|w| w.chars().count() > min_len)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Difficulty;
    use pretty_assertions::assert_eq;

    fn happy() -> MeaningWord {
        MeaningWord {
            id: 1,
            word: "Happy".to_string(),
            meaning: "feeling joy or pleasure".to_string(),
            keywords: ["joy", "pleasure", "good", "smile", "glad"]
                .map(str::to_string)
                .to_vec(),
            synonyms: ["joyful", "glad", "cheerful"].map(str::to_string).to_vec(),
            example: "I am happy to see you!".to_string(),
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn verbatim_synonym_is_always_correct() {
        let feedback = grade_meaning("cheerful", &happy());
        assert_eq!(feedback.verdict, Verdict::Correct);
    }

    #[test]
    fn enough_keywords_are_correct() {
        // "joy" and "smile" hit 2 of 5 keywords = 0.4
        let feedback = grade_meaning("you feel joy and smile", &happy());
        assert_eq!(feedback.verdict, Verdict::Correct);
        assert!(feedback.matched_concepts.contains(&"joy".to_string()));
        assert!(feedback.matched_concepts.contains(&"smile".to_string()));
    }

    #[test]
    fn meaning_overlap_alone_can_be_correct() {
        // "feeling" and "pleasure" overlap 2 of 3 meaning tokens
        let feedback = grade_meaning("a feeling of pleasure", &happy());
        assert_eq!(feedback.verdict, Verdict::Correct);
    }

    #[test]
    fn long_attempt_without_matches_is_partial() {
        let feedback = grade_meaning("when the weather seems nicer outside", &happy());
        assert_eq!(feedback.verdict, Verdict::Partial);
        assert_eq!(feedback.correct_meaning.as_deref(), Some("feeling joy or pleasure"));
    }

    #[test]
    fn short_attempt_without_matches_is_incorrect() {
        let feedback = grade_meaning("dunno", &happy());
        assert_eq!(feedback.verdict, Verdict::Incorrect);
        assert!(feedback.matched_concepts.is_empty());
    }

    #[test]
    fn empty_input_is_incorrect() {
        assert_eq!(grade_meaning("", &happy()).verdict, Verdict::Incorrect);
    }

    #[test]
    fn containment_matches_inside_longer_words() {
        // "gladly" contains the synonym "glad"
        let feedback = grade_meaning("gladly", &happy());
        assert_eq!(feedback.verdict, Verdict::Correct);
    }

    #[test]
    fn punctuation_is_stripped_from_tokens() {
        let feedback = grade_meaning("it's joy, pleasure!", &happy());
        assert_eq!(feedback.verdict, Verdict::Correct);
    }
}
