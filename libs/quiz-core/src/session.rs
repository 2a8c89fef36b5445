//! Caller-owned session bookkeeping.
//!
//! The graders themselves are pure; scores and streaks live with whoever
//! runs the session. This type captures the contract those callers must
//! honor: full points and a streak extension on `Correct`, half points and
//! a streak reset on `Partial`, a bare streak reset on `Close` and
//! `Incorrect`.

use serde::Serialize;

use crate::types::Verdict;

/// Points awarded for a fully correct answer.
pub const CORRECT_POINTS: u32 = 10;
/// Points awarded for a partially correct meaning.
pub const PARTIAL_POINTS: u32 = 5;

/// Running counters for one play session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub score: u32,
    pub streak: u32,
    pub max_streak: u32,
    pub total_answered: u32,
    pub correct_count: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one grading verdict into the counters.
    pub fn record(&mut self, verdict: Verdict) {
        self.total_answered += 1;
        match verdict {
            Verdict::Correct => {
                self.correct_count += 1;
                self.score += CORRECT_POINTS;
                self.streak += 1;
                self.max_streak = self.max_streak.max(self.streak);
            }
            Verdict::Partial => {
                self.score += PARTIAL_POINTS;
                self.streak = 0;
            }
            Verdict::Close | Verdict::Incorrect => {
                self.streak = 0;
            }
        }
    }

    /// Rounded percentage of correct answers; 0 before any answer.
    pub fn accuracy(&self) -> u32 {
        if self.total_answered == 0 {
            return 0;
        }
        ((self.correct_count as f64 / self.total_answered as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn correct_answers_build_score_and_streak() {
        let mut stats = SessionStats::new();
        stats.record(Verdict::Correct);
        stats.record(Verdict::Correct);

        assert_eq!(stats.score, 20);
        assert_eq!(stats.streak, 2);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.correct_count, 2);
    }

    #[test]
    fn partial_awards_half_points_and_resets_streak() {
        let mut stats = SessionStats::new();
        stats.record(Verdict::Correct);
        stats.record(Verdict::Partial);

        assert_eq!(stats.score, 15);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.max_streak, 1);
        assert_eq!(stats.correct_count, 1);
    }

    #[test]
    fn close_and_incorrect_reset_streak_without_points() {
        let mut stats = SessionStats::new();
        stats.record(Verdict::Correct);
        stats.record(Verdict::Close);
        stats.record(Verdict::Incorrect);

        assert_eq!(stats.score, 10);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.total_answered, 3);
    }

    #[test]
    fn max_streak_survives_resets() {
        let mut stats = SessionStats::new();
        for _ in 0..3 {
            stats.record(Verdict::Correct);
        }
        stats.record(Verdict::Incorrect);
        stats.record(Verdict::Correct);

        assert_eq!(stats.streak, 1);
        assert_eq!(stats.max_streak, 3);
    }

    #[test]
    fn accuracy_rounds_to_whole_percent() {
        let mut stats = SessionStats::new();
        assert_eq!(stats.accuracy(), 0);

        stats.record(Verdict::Correct);
        stats.record(Verdict::Correct);
        stats.record(Verdict::Incorrect);
        assert_eq!(stats.accuracy(), 67);
    }
}
