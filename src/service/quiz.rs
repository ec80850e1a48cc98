//! Next-question selection for a quiz session.
//!
//! The caller owns the session: every turn carries the full list of ids it
//! has already been shown, and the selector keeps nothing between calls.

use crate::db::{Category, Question};
use crate::error::TriviaError;
use crate::service::question_repo::QuestionRepository;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Category(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizFilter {
    pub category: QuizCategory,
    pub previously_asked: HashSet<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizTurn {
    Next(Question),
    /// Every eligible question has been asked. Not an error.
    Exhausted,
}

impl QuizTurn {
    pub fn into_question(self) -> Option<Question> {
        match self {
            QuizTurn::Next(q) => Some(q),
            QuizTurn::Exhausted => None,
        }
    }
}

/// One quiz turn plus the category it was drawn from (`None` for all).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    pub category: Option<Category>,
    pub turn: QuizTurn,
}

/// Drop already-asked questions from `pool` and pick one of the rest with
/// equal probability.
pub fn select_next<R>(
    pool: Vec<Question>,
    previously_asked: &HashSet<i64>,
    rng: &mut R,
) -> QuizTurn
where
    R: Rng,
{
    let mut remaining: Vec<Question> = pool
        .into_iter()
        .filter(|q| !previously_asked.contains(&q.id))
        .collect();
    if remaining.is_empty() {
        return QuizTurn::Exhausted;
    }
    let index = rng.gen_range(0..remaining.len());
    QuizTurn::Next(remaining.swap_remove(index))
}

#[derive(Clone)]
pub struct QuizSelector {
    questions: QuestionRepository,
}

impl QuizSelector {
    pub fn new(questions: QuestionRepository) -> Self {
        Self { questions }
    }

    /// Resolve the eligible pool for `filter.category`, then select.
    pub async fn next_question(&self, filter: &QuizFilter) -> Result<QuizRound, TriviaError> {
        let (category, pool) = match filter.category {
            QuizCategory::All => (None, self.questions.list_all().await?),
            QuizCategory::Category(id) => {
                let (category, pool) = self.questions.category_pool(id).await?;
                (Some(category), pool)
            }
        };
        let pool_size = pool.len();
        let turn = select_next(pool, &filter.previously_asked, &mut rand::thread_rng());
        debug!(
            pool_size,
            asked = filter.previously_asked.len(),
            exhausted = matches!(turn, QuizTurn::Exhausted),
            "quiz turn selected"
        );
        Ok(QuizRound { category, turn })
    }
}
