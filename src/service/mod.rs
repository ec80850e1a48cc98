pub mod category_index;
pub mod question_repo;
pub mod quiz;

pub use category_index::CategoryIndex;
pub use question_repo::{QuestionDraft, QuestionRepository};
pub use quiz::{QuizCategory, QuizFilter, QuizRound, QuizSelector, QuizTurn};
