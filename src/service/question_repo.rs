use crate::db::{Category, NewQuestion, Question, TriviaStore};
use crate::error::TriviaError;
use crate::service::category_index::CategoryIndex;
use std::ops::RangeInclusive;
use tracing::{info, warn};

pub const DIFFICULTY_RANGE: RangeInclusive<i64> = 1..=5;

/// Unvalidated create input; every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

impl QuestionDraft {
    /// Reject empty, zero or missing fields before anything reaches the store.
    pub fn validate(self) -> Result<NewQuestion, TriviaError> {
        let question = non_blank("question", self.question)?;
        let answer = non_blank("answer", self.answer)?;

        let difficulty = match self.difficulty {
            None | Some(0) => return Err(TriviaError::bad_request("difficulty is required")),
            Some(d) if !DIFFICULTY_RANGE.contains(&d) => {
                return Err(TriviaError::bad_request(format!(
                    "difficulty {d} is outside 1..=5"
                )));
            }
            Some(d) => d,
        };

        let category = match self.category {
            None | Some(0) => return Err(TriviaError::bad_request("category is required")),
            Some(c) if c < 0 => {
                return Err(TriviaError::bad_request(format!("category {c} is invalid")));
            }
            Some(c) => c,
        };

        Ok(NewQuestion {
            question,
            answer,
            difficulty,
            category,
        })
    }
}

fn non_blank(field: &str, value: Option<String>) -> Result<String, TriviaError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(TriviaError::bad_request(format!("{field} is required"))),
    }
}

#[derive(Clone)]
pub struct QuestionRepository {
    store: TriviaStore,
    categories: CategoryIndex,
}

impl QuestionRepository {
    pub fn new(store: TriviaStore) -> Self {
        let categories = CategoryIndex::new(store.clone());
        Self { store, categories }
    }

    /// Every question, ascending by id.
    pub async fn list_all(&self) -> Result<Vec<Question>, TriviaError> {
        Ok(self.store.questions().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Question, TriviaError> {
        self.store
            .question_by_id(id)
            .await?
            .ok_or_else(|| TriviaError::not_found("question", id))
    }

    /// Questions in one category.
    ///
    /// An unknown category and a category without questions both surface as
    /// `NotFound`.
    pub async fn list_by_category(&self, category_id: i64) -> Result<Vec<Question>, TriviaError> {
        let (_, questions) = self.category_pool(category_id).await?;
        Ok(questions)
    }

    /// [`Self::list_by_category`] that also hands back the resolved category.
    pub async fn category_pool(
        &self,
        category_id: i64,
    ) -> Result<(Category, Vec<Question>), TriviaError> {
        let category = self.categories.resolve(category_id).await?;
        let questions = self.store.questions_by_category(category_id).await?;
        if questions.is_empty() {
            return Err(TriviaError::EmptyResult("category has no questions"));
        }
        Ok((category, questions))
    }

    /// Case-insensitive substring match on the question text. An empty term
    /// matches everything; no match is an empty vec.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, TriviaError> {
        Ok(self.store.questions_matching(term).await?)
    }

    pub async fn create(&self, draft: QuestionDraft) -> Result<Question, TriviaError> {
        let new = draft.validate()?;
        let id = self
            .store
            .insert_question(&new)
            .await
            .map_err(|e| TriviaError::unprocessable("insert question", e))?;
        info!(id, category = new.category, "question created");
        Ok(new.with_id(id))
    }

    pub async fn delete(&self, id: i64) -> Result<(), TriviaError> {
        self.get(id).await?;
        let removed = self
            .store
            .delete_question(id)
            .await
            .map_err(|e| TriviaError::unprocessable("delete question", e))?;
        if removed == 0 {
            warn!(id, "question vanished before delete");
            return Err(TriviaError::not_found("question", id));
        }
        info!(id, "question deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Outcome;

    fn draft() -> QuestionDraft {
        QuestionDraft {
            question: Some("Who painted the Mona Lisa?".into()),
            answer: Some("Leonardo da Vinci".into()),
            difficulty: Some(2),
            category: Some(2),
        }
    }

    #[test]
    fn complete_draft_validates() {
        let new = draft().validate().unwrap();
        assert_eq!(new.difficulty, 2);
        assert_eq!(new.category, 2);
    }

    #[test]
    fn missing_or_empty_fields_are_bad_requests() {
        let broken = [
            QuestionDraft {
                question: Some(String::new()),
                ..draft()
            },
            QuestionDraft {
                answer: Some("   ".into()),
                ..draft()
            },
            QuestionDraft {
                answer: None,
                ..draft()
            },
            QuestionDraft {
                difficulty: Some(0),
                ..draft()
            },
            QuestionDraft {
                difficulty: Some(6),
                ..draft()
            },
            QuestionDraft {
                category: None,
                ..draft()
            },
            QuestionDraft {
                category: Some(0),
                ..draft()
            },
            QuestionDraft::default(),
        ];
        for d in broken {
            let err = d.clone().validate().unwrap_err();
            assert_eq!(err.outcome(), Outcome::BadRequest, "{d:?}");
        }
    }
}
