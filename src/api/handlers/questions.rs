//! Question handlers.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

use super::{IntegerField, PageParams, STATUS_OK, category_map, require};
use crate::api::{ApiError, AppState, ErrorResponse};
use crate::db::{Database, Id, NewQuestion, Question, QuestionRepository};
use crate::selection::{QuestionFilter, SearchTerm, SelectionError, paginate};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Question response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionResponse {
    #[schema(example = 5)]
    pub id: Id,
    #[schema(example = "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?")]
    pub question: String,
    #[schema(example = "Maya Angelou")]
    pub answer: String,
    #[schema(example = 4)]
    pub category: Id,
    #[schema(example = 2)]
    pub difficulty: i64,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Paginated question listing
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsResponse {
    pub success: bool,
    #[schema(example = 200)]
    pub status: u16,
    pub questions: Vec<QuestionResponse>,
    /// Size of the whole question set, not just this page
    pub total_questions: usize,
    pub categories: BTreeMap<Id, String>,
    /// Always null for the unfiltered listing
    pub current_category: Option<Id>,
}

/// Create question request DTO
///
/// All fields are required; they are optional here so a missing one can be
/// reported as a 400 rather than a deserialization failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    #[schema(example = "What is the biggest planet in the solar system?")]
    pub question: Option<String>,
    #[schema(example = "Jupiter")]
    pub answer: Option<String>,
    #[schema(value_type = i64, example = 1)]
    pub difficulty: Option<IntegerField>,
    #[schema(value_type = i64, example = 1)]
    pub category: Option<IntegerField>,
}

impl CreateQuestionRequest {
    fn into_new_question(self) -> Result<NewQuestion, SelectionError> {
        let question = require(self.question, "question")?;
        let answer = require(self.answer, "answer")?;
        let difficulty = require(self.difficulty, "difficulty")?.parse("difficulty")?;
        let category = require(self.category, "category")?.parse("category")?;

        if difficulty < 1 {
            return Err(SelectionError::InvalidField {
                field: "difficulty",
                message: format!("must be at least 1, got {}", difficulty),
            });
        }

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

/// Create question response
#[derive(Serialize, ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    #[schema(example = 200)]
    pub status: u16,
    /// Id assigned to the new question
    pub created: Id,
}

/// Delete question response
#[derive(Serialize, ToSchema)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    #[schema(example = 200)]
    pub status: u16,
    pub deleted: Id,
}

/// Search request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchQuestionsRequest {
    #[serde(rename = "searchTerm")]
    #[schema(example = "title")]
    pub search_term: Option<String>,
}

/// Search response
#[derive(Serialize, ToSchema)]
pub struct SearchQuestionsResponse {
    pub success: bool,
    #[schema(example = 200)]
    pub status: u16,
    pub questions: Vec<QuestionResponse>,
    /// Number of matches across all pages
    pub total_questions: usize,
}

// =============================================================================
// Handlers
// =============================================================================

/// List questions
///
/// Returns one page of all questions plus the category map
#[utoipa::path(
    get,
    path = "/questions",
    tag = "questions",
    params(PageParams),
    responses(
        (status = 200, description = "Page of questions", body = QuestionsResponse),
        (status = 404, description = "Page is empty", body = ErrorResponse),
        (status = 422, description = "Store failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_questions<D: Database>(
    State(state): State<AppState<D>>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let Query(params) = query?;
    let questions = state.db().questions().list(&QuestionFilter::all()).await?;
    let page = paginate(questions, params.request())?.map(QuestionResponse::from);
    let categories = category_map(state.db()).await?;
    debug!(total = page.total, page = page.page, "listed questions");

    Ok(Json(QuestionsResponse {
        success: true,
        status: STATUS_OK,
        questions: page.items,
        total_questions: page.total,
        categories,
        current_category: None,
    }))
}

/// Create a question
///
/// Inserts a question; the category must exist
#[utoipa::path(
    post,
    path = "/questions",
    tag = "questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 422, description = "Unknown category or store failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_question<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<Json<CreateQuestionResponse>, ApiError> {
    let Json(req) = payload?;
    let new_question = req.into_new_question()?;

    let created = state.db().questions().create(&new_question).await?;
    info!(id = created.id, category = created.category, "created question");

    Ok(Json(CreateQuestionResponse {
        success: true,
        status: STATUS_OK,
        created: created.id,
    }))
}

/// Delete a question
///
/// Deletes a question by its ID
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tag = "questions",
    params(
        ("id" = i64, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 422, description = "Store failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_question<D: Database>(
    State(state): State<AppState<D>>,
    path: Result<Path<Id>, PathRejection>,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    let Path(id) = path?;
    state.db().questions().delete(id).await?;
    info!(id, "deleted question");

    Ok(Json(DeleteQuestionResponse {
        success: true,
        status: STATUS_OK,
        deleted: id,
    }))
}

/// Search questions
///
/// Case-insensitive substring search over question text
#[utoipa::path(
    post,
    path = "/questions/search",
    tag = "questions",
    params(PageParams),
    request_body = SearchQuestionsRequest,
    responses(
        (status = 200, description = "Matching questions", body = SearchQuestionsResponse),
        (status = 400, description = "Missing or empty search term", body = ErrorResponse),
        (status = 404, description = "No matches or empty page", body = ErrorResponse),
        (status = 422, description = "Store failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state, query, payload))]
pub async fn search_questions<D: Database>(
    State(state): State<AppState<D>>,
    query: Result<Query<PageParams>, QueryRejection>,
    payload: Result<Json<SearchQuestionsRequest>, JsonRejection>,
) -> Result<Json<SearchQuestionsResponse>, ApiError> {
    let Query(params) = query?;
    let Json(req) = payload?;
    let term = SearchTerm::parse(req.search_term.as_deref())?;

    let matches = state
        .db()
        .questions()
        .list(&QuestionFilter::matching(term.clone()))
        .await?;
    if matches.is_empty() {
        return Err(SelectionError::NoMatches {
            term: term.as_str().to_string(),
        }
        .into());
    }

    let page = paginate(matches, params.request())?.map(QuestionResponse::from);
    debug!(term = term.as_str(), total = page.total, "searched questions");

    Ok(Json(SearchQuestionsResponse {
        success: true,
        status: STATUS_OK,
        questions: page.items,
        total_questions: page.total,
    }))
}
