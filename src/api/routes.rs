//! API route configuration.

use axum::Router;
use axum::http::{Method, header};
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::error::ErrorResponse;
use super::handlers::{
    self, CategoriesResponse, CategoryQuestionsResponse, CreateQuestionRequest,
    CreateQuestionResponse, DeleteQuestionResponse, HealthResponse, QuestionResponse,
    QuestionsResponse, QuizCategory, QuizRequest, QuizResponse, SearchQuestionsRequest,
    SearchQuestionsResponse,
};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router: Router<AppState<$D>> = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "Questions, categories, and quiz play for a trivia game",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::health,
        handlers::list_categories,
        handlers::list_category_questions,
        handlers::list_questions,
        handlers::create_question,
        handlers::delete_question,
        handlers::search_questions,
        handlers::play_quiz,
    ),
    components(
        schemas(
            HealthResponse,
            CategoriesResponse,
            CategoryQuestionsResponse,
            QuestionResponse,
            QuestionsResponse,
            CreateQuestionRequest,
            CreateQuestionResponse,
            DeleteQuestionResponse,
            SearchQuestionsRequest,
            SearchQuestionsResponse,
            QuizCategory,
            QuizRequest,
            QuizResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health endpoints"),
        (name = "categories", description = "Category browsing endpoints"),
        (name = "questions", description = "Question management and search endpoints"),
        (name = "quizzes", description = "Quiz play endpoints")
    )
)]
pub struct ApiDoc;

/// Cross-origin policy: any origin, the verbs and headers the game client uses.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes: Router<AppState<D>> =
        Router::new().route("/health", get(handlers::health));

    // Category routes (generic over Database)
    let category_routes = routes!(D => {
        get "/categories" => handlers::list_categories,
        get "/categories/{id}/questions" => handlers::list_category_questions,
    });

    // Question routes (generic over Database)
    let question_routes = routes!(D => {
        get "/questions" => handlers::list_questions,
        post "/questions" => handlers::create_question,
        post "/questions/search" => handlers::search_questions,
        delete "/questions/{id}" => handlers::delete_question,
    });

    // Quiz routes (generic over Database)
    let quiz_routes = routes!(D => {
        post "/quizzes" => handlers::play_quiz,
    });

    system_routes
        .merge(category_routes)
        .merge(question_routes)
        .merge(quiz_routes)
        .merge(Scalar::with_url("/docs", api))
        .fallback(handlers::not_found)
        .layer(cors_layer())
        .with_state(state)
}
