//! Question ingestion from per-topic sheet CSV.
//!
//! # Column contract (0-indexed)
//! `0` question text, `1-4` answer options A-D, `5` correct-answer text
//! (the full text of the correct option, not a letter), `6` hint, `7` know
//! more description, `8` know-more URL, `10` image URL, `13` worksheet
//! number. Columns 9, 11 and 12 are reserved by the sheet and unused here.

use crate::csv::split_quoted_line;
use crate::types::{Answer, AnswerLetter, Question};

/// Per-ingestion diagnostics. The parser tolerates malformed rows instead
/// of failing; these counters let integrators spot a broken sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Non-blank data rows encountered (header excluded).
    pub rows_seen: usize,
    /// Rows dropped for having fewer than six fields.
    pub rows_dropped: usize,
    /// Rows excluded by the worksheet-number filter.
    pub filtered_out: usize,
    /// Rows whose answer text matched no option and defaulted to letter A.
    pub unmatched_answers: usize,
}

/// Parse sheet CSV text into questions for `topic_id`.
///
/// When `filter_worksheet` is given, rows carrying a different parseable
/// worksheet number are excluded; rows whose worksheet column is missing or
/// unparsable pass the filter.
pub fn parse_questions(
    csv_text: &str,
    topic_id: &str,
    filter_worksheet: Option<u32>,
) -> Vec<Question> {
    parse_questions_with_stats(csv_text, topic_id, filter_worksheet).0
}

/// [`parse_questions`] with per-run [`IngestStats`].
pub fn parse_questions_with_stats(
    csv_text: &str,
    topic_id: &str,
    filter_worksheet: Option<u32>,
) -> (Vec<Question>, IngestStats) {
    let mut questions = Vec::new();
    let mut stats = IngestStats::default();

    for (idx, raw) in csv_text.trim().lines().enumerate() {
        // line 0 is the header row
        if idx == 0 {
            continue;
        }
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        stats.rows_seen += 1;

        let parts = split_quoted_line(line);
        if parts.len() < 6 {
            stats.rows_dropped += 1;
            continue;
        }
        let field = |i: usize| parts.get(i).map(String::as_str).unwrap_or("");

        let worksheet_number = field(13).parse::<u32>().ok();

        // The filter only engages when both sides are known integers.
        if let (Some(wanted), Some(own)) = (filter_worksheet, worksheet_number) {
            if own != wanted {
                stats.filtered_out += 1;
                continue;
            }
        }

        let options = [field(1), field(2), field(3), field(4)];
        let answer_text = field(5);

        // Resolve the correct-answer letter by text match, first match
        // wins. A row whose answer text matches no option defaults to A;
        // the sheet is considered authoritative and the quirk is surfaced
        // through stats rather than an error.
        let correct_answer = match options
            .iter()
            .position(|opt| opt.trim().to_lowercase() == answer_text.trim().to_lowercase())
        {
            Some(i) => AnswerLetter::ALL[i],
            None => {
                stats.unmatched_answers += 1;
                AnswerLetter::A
            }
        };

        questions.push(Question {
            id: format!("{}-q{}", topic_id, idx),
            text: field(0).to_string(),
            hint: non_empty(field(6)),
            know_more_text: non_empty(field(7)),
            know_more_url: non_empty(field(8)),
            image_url: non_empty(field(10)),
            answers: options
                .iter()
                .zip(AnswerLetter::ALL)
                .map(|(text, id)| Answer {
                    id,
                    text: text.to_string(),
                })
                .collect(),
            correct_answer,
            topic: topic_id.to_string(),
            worksheet_number,
        });
    }

    (questions, stats)
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
