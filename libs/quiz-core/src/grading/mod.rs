//! Free-text answer grading for the spell-check mini-games.
//!
//! Both graders are pure: they classify a single submission and return a
//! [`Feedback`](crate::types::Feedback) record. Score and streak
//! bookkeeping belongs to the caller; see [`crate::session`].

mod meaning;
mod spelling;

pub use meaning::grade_meaning;
pub use spelling::grade_spelling;

use rand::Rng;

/// Affirmation shown on a correct answer, picked uniformly at random.
/// Cosmetic only; verdicts never depend on it.
const CORRECT_MESSAGES: [&str; 5] = [
    "\u{1F389} Awesome!",
    "\u{2B50} Wonderful!",
    "\u{1F31F} Brilliant!",
    "\u{1F3C6} Amazing!",
    "\u{2728} Fantastic!",
];

pub(crate) fn random_correct_message() -> String {
    let idx = rand::rng().random_range(0..CORRECT_MESSAGES.len());
    CORRECT_MESSAGES[idx].to_string()
}
