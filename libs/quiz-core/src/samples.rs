//! Hardcoded sample content.
//!
//! Used whenever live sheet retrieval yields no usable rows, so a broken
//! or unconfigured sheet never interrupts play. The fallback is deliberate
//! and invisible to callers; there is no distinguishable error type.

use crate::types::{
    Answer, AnswerLetter, Difficulty, MeaningWord, Question, SpellWord, Topic,
};

/// The built-in topic table. Sheet URLs start as `PLACEHOLDER_*` sentinels
/// until the master configuration sheet supplies real links.
pub fn builtin_topics() -> Vec<Topic> {
    vec![
        topic("space", "Theme", "\u{1F680}", "#4dd0e1", Difficulty::Easy, 10, 1),
        topic("geography", "English", "\u{1F30D}", "#66bb6a", Difficulty::Medium, 8, 2),
        topic("math", "Math", "\u{1F522}", "#ffa726", Difficulty::Hard, 12, 3),
        topic("spell", "Spell Check", "\u{270F}\u{FE0F}", "#ab47bc", Difficulty::Medium, 7, 4),
    ]
}

fn topic(
    id: &str,
    name: &str,
    icon: &str,
    color: &str,
    difficulty: Difficulty,
    total: u32,
    worksheet_number: u32,
) -> Topic {
    Topic {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        difficulty,
        total,
        sheet_url: format!("PLACEHOLDER_{}_SHEET_URL", id.to_uppercase()),
        worksheet_number: Some(worksheet_number),
        worksheet_gid: None,
    }
}

/// Sample questions for a topic id; unknown topics yield an empty list.
pub fn sample_questions(topic_id: &str) -> Vec<Question> {
    match topic_id {
        "space" => vec![
            question(
                "space-q1",
                "space",
                "Who took Lily and Max on their space trip?",
                Some("Read the story carefully before answering."),
                ["Captain Star", "Emma", "Jake", "Columbus"],
                AnswerLetter::A,
            ),
            question(
                "space-q2",
                "space",
                "What planet is known as the Red Planet?",
                None,
                ["Venus", "Mars", "Jupiter", "Saturn"],
                AnswerLetter::B,
            ),
        ],
        "geography" => vec![question(
            "geography-q1",
            "geography",
            "What is the capital of France?",
            None,
            ["London", "Berlin", "Paris", "Madrid"],
            AnswerLetter::C,
        )],
        "math" => vec![question(
            "math-q1",
            "math",
            "What is 12 + 8?",
            None,
            ["18", "20", "22", "24"],
            AnswerLetter::B,
        )],
        "spell" => vec![question(
            "spell-q1",
            "spell",
            "Which word is spelled correctly?",
            Some("Look carefully at each spelling before choosing."),
            ["Beatiful", "Beautiful", "Beutiful", "Beautifull"],
            AnswerLetter::B,
        )],
        _ => Vec::new(),
    }
}

fn question(
    id: &str,
    topic: &str,
    text: &str,
    hint: Option<&str>,
    options: [&str; 4],
    correct_answer: AnswerLetter,
) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        hint: hint.map(str::to_string),
        know_more_text: None,
        know_more_url: None,
        image_url: None,
        answers: options
            .iter()
            .zip(AnswerLetter::ALL)
            .map(|(text, id)| Answer {
                id,
                text: text.to_string(),
            })
            .collect(),
        correct_answer,
        topic: topic.to_string(),
        worksheet_number: None,
    }
}

/// Word list for the spelling challenge.
pub fn spell_words() -> Vec<SpellWord> {
    [
        (1, "elephant", Difficulty::Easy, "Animals", "Large grey animal with a long trunk", "ele____t"),
        (2, "beautiful", Difficulty::Medium, "Adjectives", "Very pretty or attractive", "beau____ul"),
        (3, "butterfly", Difficulty::Easy, "Animals", "Colorful insect with wings", "butt____ly"),
        (4, "chocolate", Difficulty::Easy, "Food", "Sweet brown candy", "choc____te"),
        (5, "favourite", Difficulty::Medium, "Adjectives", "The one you like the most", "favo____te"),
        (6, "knowledge", Difficulty::Hard, "Nouns", "What you learn and know", "know____ge"),
        (7, "difficult", Difficulty::Medium, "Adjectives", "Not easy to do", "diffi____t"),
        (8, "adventure", Difficulty::Medium, "Nouns", "An exciting journey", "adven____e"),
    ]
    .into_iter()
    .map(|(id, word, difficulty, category, hint, pattern)| SpellWord {
        id,
        word: word.to_string(),
        difficulty,
        category: category.to_string(),
        hint: hint.to_string(),
        fill_in_blank: Some(pattern.to_string()),
    })
    .collect()
}

/// Word list for the meaning challenge.
pub fn meaning_words() -> Vec<MeaningWord> {
    vec![
        meaning_word(
            1,
            "Happy",
            "feeling joy or pleasure",
            &["joy", "pleasure", "good", "smile", "glad"],
            &["joyful", "glad", "cheerful"],
            "I am happy to see you!",
            Difficulty::Easy,
        ),
        meaning_word(
            2,
            "Brave",
            "not afraid of danger",
            &["courage", "fear", "strong", "bold"],
            &["courageous", "fearless", "bold"],
            "The brave firefighter saved the cat.",
            Difficulty::Easy,
        ),
        meaning_word(
            3,
            "Curious",
            "wanting to know or learn something",
            &["know", "learn", "question", "wonder"],
            &["inquisitive", "interested", "eager"],
            "The curious child asked many questions.",
            Difficulty::Medium,
        ),
        meaning_word(
            4,
            "Enormous",
            "very large in size",
            &["big", "large", "huge", "giant"],
            &["huge", "massive", "gigantic"],
            "The elephant was enormous!",
            Difficulty::Easy,
        ),
        meaning_word(
            5,
            "Generous",
            "willing to give and share with others",
            &["give", "share", "kind", "help"],
            &["kind", "giving", "charitable"],
            "She was generous with her toys.",
            Difficulty::Medium,
        ),
        meaning_word(
            6,
            "Peaceful",
            "calm and quiet without worry",
            &["calm", "quiet", "relax", "gentle"],
            &["calm", "tranquil", "serene"],
            "The garden was peaceful.",
            Difficulty::Easy,
        ),
    ]
}

fn meaning_word(
    id: u32,
    word: &str,
    meaning: &str,
    keywords: &[&str],
    synonyms: &[&str],
    example: &str,
    difficulty: Difficulty,
) -> MeaningWord {
    MeaningWord {
        id,
        word: word.to_string(),
        meaning: meaning.to_string(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        example: example.to_string(),
        difficulty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_topics_have_samples() {
        for id in ["space", "geography", "math", "spell"] {
            assert!(!sample_questions(id).is_empty(), "no samples for {id}");
        }
    }

    #[test]
    fn unknown_topic_yields_empty() {
        assert!(sample_questions("history").is_empty());
    }

    #[test]
    fn every_sample_has_four_options_and_a_valid_answer() {
        for id in ["space", "geography", "math", "spell"] {
            for q in sample_questions(id) {
                assert_eq!(q.answers.len(), 4, "{}", q.id);
                assert!(
                    q.answers.iter().any(|a| a.id == q.correct_answer),
                    "{} points at a missing option",
                    q.id
                );
            }
        }
    }

    #[test]
    fn builtin_topics_cover_the_four_modules() {
        let ids: Vec<String> = builtin_topics().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, ["space", "geography", "math", "spell"]);
    }

    #[test]
    fn word_lists_are_populated() {
        assert_eq!(spell_words().len(), 8);
        assert_eq!(meaning_words().len(), 6);
    }
}
