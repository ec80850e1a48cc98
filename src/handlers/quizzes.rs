use axum::{Json, extract::State};

use crate::middleware::TriviaJson;
use crate::service::QuizFilter;
use crate::types::requests::QuizRequest;
use crate::types::responses::QuizResponse;
use crate::{TriviaError, router::TriviaState};

const ALL_CATEGORIES_LABEL: &str = "ALL";

/// POST /quizzes -> the next unasked question, or `question: null` once the
/// session has seen every eligible question.
pub async fn next_quiz_question(
    State(state): State<TriviaState>,
    TriviaJson(req): TriviaJson<QuizRequest>,
) -> Result<Json<QuizResponse>, TriviaError> {
    let filter = QuizFilter::try_from(&req)?;

    let round = state.quiz.next_question(&filter).await?;
    let quiz_category = round
        .category
        .map_or_else(|| ALL_CATEGORIES_LABEL.to_string(), |c| c.kind);

    Ok(Json(QuizResponse {
        success: true,
        quiz_category,
        previous_questions: req.previous_questions(),
        question: round.turn.into_question(),
    }))
}
