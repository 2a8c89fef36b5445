//! Word-list endpoints for the spell-check mini-games.

use axum::{extract::Query, Json};
use serde::Deserialize;

use quiz_core::samples;
use quiz_core::types::Difficulty;

use crate::error::{ApiError, Result};
use crate::models::*;

#[derive(Debug, Deserialize)]
pub struct WordListQuery {
    pub difficulty: Option<String>,
}

impl WordListQuery {
    fn difficulty_filter(&self) -> Result<Option<Difficulty>> {
        match &self.difficulty {
            None => Ok(None),
            Some(raw) => Difficulty::parse(raw)
                .map(Some)
                .ok_or_else(|| ApiError::BadRequest(format!("unknown difficulty {}", raw))),
        }
    }
}

/// GET /api/spell/words
pub async fn spell_words(Query(query): Query<WordListQuery>) -> Result<Json<SpellWordListResponse>> {
    let filter = query.difficulty_filter()?;
    let words = samples::spell_words()
        .into_iter()
        .filter(|w| filter.map_or(true, |d| w.difficulty == d))
        .map(SpellWordItem::from)
        .collect();

    Ok(Json(SpellWordListResponse { words }))
}

/// GET /api/spell/meanings
pub async fn meaning_words(
    Query(query): Query<WordListQuery>,
) -> Result<Json<MeaningWordListResponse>> {
    let filter = query.difficulty_filter()?;
    let words = samples::meaning_words()
        .into_iter()
        .filter(|w| filter.map_or(true, |d| w.difficulty == d))
        .collect();

    Ok(Json(MeaningWordListResponse { words }))
}
