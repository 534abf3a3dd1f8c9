//! Category handlers.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use serde::Serialize;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use super::{PageParams, QuestionResponse, STATUS_OK};
use crate::api::{ApiError, AppState, ErrorResponse};
use crate::db::{CategoryRepository, Database, DbError, Id, QuestionRepository};
use crate::selection::{QuestionFilter, SelectionError, paginate};

/// Category listing response
#[derive(Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    #[schema(example = 200)]
    pub status: u16,
    /// Category id to type label
    #[schema(example = json!({"1": "Science", "2": "Art"}))]
    pub categories: BTreeMap<Id, String>,
}

/// Questions of one category
#[derive(Serialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    #[schema(example = 200)]
    pub status: u16,
    pub questions: Vec<QuestionResponse>,
    /// Size of the whole category, not just this page
    pub total_questions: usize,
    pub current_category: Id,
}

/// Load every category as an id → label map.
pub(crate) async fn category_map<D: Database>(db: &D) -> Result<BTreeMap<Id, String>, ApiError> {
    let categories = db.categories().list().await?;
    Ok(categories.into_iter().map(|c| (c.id, c.kind)).collect())
}

/// Look a category up, reporting a missing one as a selection error.
pub(crate) async fn ensure_category<D: Database>(db: &D, id: Id) -> Result<(), ApiError> {
    match db.categories().get(id).await {
        Ok(_) => Ok(()),
        Err(DbError::NotFound { .. }) => Err(SelectionError::UnknownCategory { id }.into()),
        Err(e) => Err(e.into()),
    }
}

/// List all categories
///
/// Returns every category keyed by id
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Category map", body = CategoriesResponse),
        (status = 404, description = "No categories exist", body = ErrorResponse),
        (status = 422, description = "Store failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_categories<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = category_map(state.db()).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound("no categories".to_string()));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        status: STATUS_OK,
        categories,
    }))
}

/// List questions in a category
///
/// Returns one page of the category's questions
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    tag = "categories",
    params(
        ("id" = i64, Path, description = "Category ID"),
        PageParams
    ),
    responses(
        (status = 200, description = "Page of questions", body = CategoryQuestionsResponse),
        (status = 404, description = "Unknown category or empty page", body = ErrorResponse),
        (status = 422, description = "Store failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_category_questions<D: Database>(
    State(state): State<AppState<D>>,
    path: Result<Path<Id>, PathRejection>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let Path(id) = path?;
    let Query(params) = query?;
    ensure_category(state.db(), id).await?;

    let questions = state
        .db()
        .questions()
        .list(&QuestionFilter::in_category(id))
        .await?;
    let page = paginate(questions, params.request())?.map(QuestionResponse::from);
    debug!(category = id, total = page.total, page = page.page, "listed category questions");

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        status: STATUS_OK,
        questions: page.items,
        total_questions: page.total,
        current_category: id,
    }))
}
