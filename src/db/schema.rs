//! SQL DDL for initializing the question bank.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `categories.id` INTEGER PRIMARY KEY, `type` the display name
/// - `questions.category` REFERENCES `categories(id)` (enforced with `foreign_keys = ON`)
/// - `difficulty` constrained to 1..=5
/// - Index on `questions.category` for category-scoped listing
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY,
    type TEXT NOT NULL CHECK (length(type) > 0)
);

CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT NOT NULL CHECK (length(question) > 0),
    answer TEXT NOT NULL CHECK (length(answer) > 0),
    difficulty INTEGER NOT NULL CHECK (difficulty BETWEEN 1 AND 5),
    category INTEGER NOT NULL REFERENCES categories(id)
);

CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);
"#;

/// Categories every fresh store starts with.
pub const DEFAULT_CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];
