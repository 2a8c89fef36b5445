//! Topic, question and leaderboard endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use quiz_core::{apply_config, samples};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/topics
///
/// The built-in topic table with master-sheet configuration applied.
pub async fn topics(State(state): State<AppState>) -> Json<TopicListResponse> {
    let configs = state.sheets.topic_configs().await;
    let topics = samples::builtin_topics()
        .iter()
        .map(|topic| apply_config(topic, &configs))
        .collect();

    Json(TopicListResponse { topics })
}

/// GET /api/topics/{id}/questions
///
/// Live sheet content when the topic is configured, sample questions
/// otherwise; the fallback is invisible to clients.
pub async fn questions(
    State(state): State<AppState>,
    Path(topic_id): Path<String>,
) -> Result<Json<QuestionListResponse>> {
    let topics = samples::builtin_topics();
    let topic = topics
        .iter()
        .find(|t| t.id == topic_id)
        .ok_or_else(|| ApiError::NotFound(format!("topic {}", topic_id)))?;

    let configs = state.sheets.topic_configs().await;
    let topic = apply_config(topic, &configs);
    let questions = state.sheets.questions_for_topic(&topic).await;

    Ok(Json(QuestionListResponse {
        topic_id,
        count: questions.len(),
        questions,
    }))
}

/// GET /api/leaderboard
pub async fn leaderboard(State(state): State<AppState>) -> Json<LeaderboardResponse> {
    let entries = state.sheets.leaderboard().await;
    Json(LeaderboardResponse { entries })
}
