use axum::{Json, extract::State};

use crate::middleware::IdPath;
use crate::types::responses::{CategoriesResponse, CategoryQuestionsResponse};
use crate::{TriviaError, router::TriviaState};

/// GET /categories -> every category keyed by id; 404 when none exist.
pub async fn list_categories(
    State(state): State<TriviaState>,
) -> Result<Json<CategoriesResponse>, TriviaError> {
    let categories = state.categories.as_map().await?;
    if categories.is_empty() {
        return Err(TriviaError::EmptyResult("no categories"));
    }
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{id}/questions
pub async fn category_questions(
    State(state): State<TriviaState>,
    IdPath(id): IdPath,
) -> Result<Json<CategoryQuestionsResponse>, TriviaError> {
    let (category, questions) = state.questions.category_pool(id).await?;
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category.kind,
    }))
}
