use serde::Deserialize;
use std::collections::HashSet;

use crate::error::TriviaError;
use crate::service::{QuestionDraft, QuizCategory, QuizFilter};

/// Sentinel `type` the quiz client sends for "all categories".
pub const ALL_CATEGORIES_TYPE: &str = "click";

/// Integer field that some clients send as a numeric string (`"3"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    Text(String),
}

impl IntOrString {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            IntOrString::Int(n) => Some(*n),
            IntOrString::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// `POST /questions` serves both search and create; `searchTerm` selects search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionsPostBody {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub difficulty: Option<IntOrString>,
    #[serde(default)]
    pub category: Option<IntOrString>,
}

impl From<QuestionsPostBody> for QuestionDraft {
    fn from(body: QuestionsPostBody) -> Self {
        QuestionDraft {
            question: body.question,
            answer: body.answer,
            difficulty: body.difficulty.as_ref().and_then(IntOrString::as_i64),
            category: body.category.as_ref().and_then(IntOrString::as_i64),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategoryBody {
    #[serde(default)]
    pub id: Option<IntOrString>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryBody>,
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
}

impl QuizRequest {
    pub fn previous_questions(&self) -> Vec<i64> {
        self.previous_questions.clone().unwrap_or_default()
    }
}

impl TryFrom<&QuizRequest> for QuizFilter {
    type Error = TriviaError;

    fn try_from(req: &QuizRequest) -> Result<Self, Self::Error> {
        let Some(cat) = req.quiz_category.as_ref() else {
            return Err(TriviaError::bad_request("quiz_category is required"));
        };

        let is_all = cat.kind.as_deref() == Some(ALL_CATEGORIES_TYPE);
        let category = match (is_all, cat.id.as_ref().map(IntOrString::as_i64)) {
            (true, _) | (false, Some(Some(0))) => QuizCategory::All,
            (false, Some(Some(id))) if id > 0 => QuizCategory::Category(id),
            (false, Some(Some(id))) => {
                return Err(TriviaError::bad_request(format!(
                    "quiz_category.id {id} is invalid"
                )));
            }
            (false, _) => return Err(TriviaError::bad_request("quiz_category.id is required")),
        };

        Ok(QuizFilter {
            category,
            previously_asked: req.previous_questions().into_iter().collect::<HashSet<_>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Outcome;
    use serde_json::json;

    fn quiz(value: serde_json::Value) -> Result<QuizFilter, TriviaError> {
        let req: QuizRequest = serde_json::from_value(value).unwrap();
        QuizFilter::try_from(&req)
    }

    #[test]
    fn click_type_selects_all_categories() {
        let filter = quiz(json!({
            "quiz_category": {"type": "click", "id": 0},
            "previous_questions": [4, 9]
        }))
        .unwrap();
        assert_eq!(filter.category, QuizCategory::All);
        assert_eq!(filter.previously_asked, HashSet::from([4, 9]));
    }

    #[test]
    fn category_id_is_used_verbatim() {
        let filter = quiz(json!({
            "quiz_category": {"type": "Science", "id": "1"},
            "previous_questions": []
        }))
        .unwrap();
        assert_eq!(filter.category, QuizCategory::Category(1));
    }

    #[test]
    fn malformed_filters_are_bad_requests() {
        let cases = [
            json!({"previous_questions": []}),
            json!({"quiz_category": {"id": null}, "previous_questions": []}),
            json!({"quiz_category": {"type": "Art"}}),
            json!({"quiz_category": {"id": "abc"}}),
            json!({"quiz_category": {"id": -3}}),
        ];
        for case in cases {
            let err = quiz(case.clone()).unwrap_err();
            assert_eq!(err.outcome(), Outcome::BadRequest, "{case}");
        }
    }

    #[test]
    fn missing_history_means_empty() {
        let filter = quiz(json!({"quiz_category": {"id": 2}})).unwrap();
        assert!(filter.previously_asked.is_empty());
    }

    #[test]
    fn numeric_strings_feed_the_draft() {
        let body: QuestionsPostBody = serde_json::from_value(json!({
            "question": "Q1",
            "answer": "A1",
            "difficulty": "3",
            "category": 1
        }))
        .unwrap();
        assert!(body.search_term.is_none());
        let draft = QuestionDraft::from(body);
        assert_eq!(draft.difficulty, Some(3));
        assert_eq!(draft.category, Some(1));
    }
}
