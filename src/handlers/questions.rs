use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::middleware::{IdPath, Page, TriviaJson};
use crate::pagination::paginate;
use crate::types::requests::QuestionsPostBody;
use crate::types::responses::{
    CreatedResponse, DeletedResponse, QuestionPageResponse, QuestionResponse, SearchResponse,
};
use crate::{TriviaError, router::TriviaState};

/// GET /questions?page=N -> one page of all questions plus the category map.
/// An empty page is a 404.
pub async fn list_questions(
    State(state): State<TriviaState>,
    Page(page): Page,
) -> Result<Json<QuestionPageResponse>, TriviaError> {
    let all = state.questions.list_all().await?;
    let current = paginate(&all, page);
    if current.is_empty() {
        return Err(TriviaError::EmptyResult("no questions on this page"));
    }
    let categories = state.categories.as_map().await?;

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: current.to_vec(),
        total_questions: all.len(),
        categories,
        current_category: None,
    }))
}

pub async fn get_question(
    State(state): State<TriviaState>,
    IdPath(id): IdPath,
) -> Result<Json<QuestionResponse>, TriviaError> {
    let question = state.questions.get(id).await?;
    Ok(Json(QuestionResponse {
        success: true,
        question,
    }))
}

/// POST /questions -> search when `searchTerm` is present, create otherwise.
pub async fn post_questions(
    State(state): State<TriviaState>,
    Page(page): Page,
    TriviaJson(mut body): TriviaJson<QuestionsPostBody>,
) -> Result<Response, TriviaError> {
    match body.search_term.take() {
        Some(term) => {
            let matches = state.questions.search(&term).await?;
            info!(term = %term, hits = matches.len(), "question search");
            Ok(Json(SearchResponse {
                success: true,
                questions: paginate(&matches, page).to_vec(),
                total_questions: matches.len(),
                current_category: None,
            })
            .into_response())
        }
        None => {
            let created = state.questions.create(body.into()).await?;
            let all = state.questions.list_all().await?;
            Ok(Json(CreatedResponse {
                success: true,
                created: created.id,
                questions: paginate(&all, page).to_vec(),
                total_questions: all.len(),
            })
            .into_response())
        }
    }
}

/// DELETE /questions/{id}
pub async fn delete_question(
    State(state): State<TriviaState>,
    IdPath(id): IdPath,
    Page(page): Page,
) -> Result<Json<DeletedResponse>, TriviaError> {
    state.questions.delete(id).await?;
    let all = state.questions.list_all().await?;
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
        questions: paginate(&all, page).to_vec(),
        total_questions: all.len(),
    }))
}
