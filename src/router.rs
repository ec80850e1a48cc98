use axum::{
    Router,
    http::{
        Method, Uri,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::db::TriviaStore;
use crate::error::TriviaError;
use crate::handlers::{categories, questions, quizzes};
use crate::service::{CategoryIndex, QuestionRepository, QuizSelector};

/// Shared handler state. Every component holds a clone of the same store
/// handle; nothing else is shared between requests.
#[derive(Clone)]
pub struct TriviaState {
    pub categories: CategoryIndex,
    pub questions: QuestionRepository,
    pub quiz: QuizSelector,
}

impl TriviaState {
    pub fn new(store: TriviaStore) -> Self {
        let questions = QuestionRepository::new(store.clone());
        Self {
            categories: CategoryIndex::new(store),
            quiz: QuizSelector::new(questions.clone()),
            questions,
        }
    }
}

pub fn trivia_router(state: TriviaState) -> Router {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{id}/questions",
            get(categories::category_questions),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::post_questions),
        )
        .route(
            "/questions/{id}",
            get(questions::get_question).delete(questions::delete_question),
        )
        .route("/quizzes", post(quizzes::next_quiz_question))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

async fn route_not_found(uri: Uri) -> TriviaError {
    TriviaError::not_found("route", uri)
}

async fn method_not_allowed() -> TriviaError {
    TriviaError::MethodNotAllowed
}
