//! Quiz play handler.

use std::collections::HashSet;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::ToSchema;

use super::{IntegerField, QuestionResponse, STATUS_OK, ensure_category, require};
use crate::api::{ApiError, AppState, ErrorResponse};
use crate::db::{Database, Id, QuestionRepository};
use crate::selection::{CategoryScope, QuestionFilter};

/// Category chosen on the quiz screen
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategory {
    /// Category id; 0 or "all" plays every category
    #[schema(value_type = i64, example = 1)]
    pub id: Option<IntegerField>,
    /// Display label, echoed by clients and otherwise unused
    #[serde(rename = "type")]
    #[schema(example = "Science")]
    pub kind: Option<String>,
}

/// Quiz request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequest {
    /// Ids already asked in this round
    #[schema(example = json!([1, 4]))]
    pub previous_questions: Option<Vec<Id>>,
    pub quiz_category: Option<QuizCategory>,
}

/// Next quiz question
#[derive(Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    #[schema(example = 200)]
    pub status: u16,
    pub question: QuestionResponse,
}

/// Play the next quiz question
///
/// Returns a question from the chosen category that was not asked before
#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next question", body = QuizResponse),
        (status = 400, description = "Missing previous_questions or quiz_category", body = ErrorResponse),
        (status = 404, description = "Quiz finished or unknown category", body = ErrorResponse),
        (status = 422, description = "Store failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn play_quiz<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(req) = payload?;
    let previous: HashSet<Id> = require(req.previous_questions, "previous_questions")?
        .into_iter()
        .collect();
    let category = require(req.quiz_category, "quiz_category")?;
    let category_id =
        require(category.id, "quiz_category.id")?.parse_category("quiz_category.id")?;

    let scope = CategoryScope::from_id(category_id);
    if let CategoryScope::Only(id) = scope {
        ensure_category(state.db(), id).await?;
    }

    let candidates = state
        .db()
        .questions()
        .list(&QuestionFilter::in_scope(scope))
        .await?;
    let candidate_count = candidates.len();
    let question = {
        // ThreadRng is !Send, keep it out of the await points
        let mut rng = rand::thread_rng();
        state.picker().pick(candidates, scope, &previous, &mut rng)?
    };
    debug!(
        id = question.id,
        candidates = candidate_count,
        asked = previous.len(),
        "picked quiz question"
    );

    Ok(Json(QuizResponse {
        success: true,
        status: STATUS_OK,
        question: QuestionResponse::from(question),
    }))
}
