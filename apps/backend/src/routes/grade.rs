//! Grading endpoints.
//!
//! Grading itself never fails (empty answers grade `incorrect`), so the
//! only error path is an unknown word id.

use axum::Json;

use quiz_core::{grade_meaning, grade_spelling, samples};

use crate::error::{ApiError, Result};
use crate::models::*;

/// POST /api/grade/spelling
pub async fn spelling(Json(payload): Json<GradeSpellingRequest>) -> Result<Json<Feedback>> {
    let words = samples::spell_words();
    let word = words
        .iter()
        .find(|w| w.id == payload.word_id)
        .ok_or_else(|| ApiError::NotFound(format!("spell word {}", payload.word_id)))?;

    Ok(Json(grade_spelling(&payload.answer, &word.word)))
}

/// POST /api/grade/meaning
pub async fn meaning(Json(payload): Json<GradeMeaningRequest>) -> Result<Json<Feedback>> {
    let words = samples::meaning_words();
    let word = words
        .iter()
        .find(|w| w.id == payload.word_id)
        .ok_or_else(|| ApiError::NotFound(format!("meaning word {}", payload.word_id)))?;

    Ok(Json(grade_meaning(&payload.answer, word)))
}
