use crate::db::models::{Category, NewQuestion, Question};
use crate::db::schema::{DEFAULT_CATEGORIES, SQLITE_INIT};
use caseless::default_case_fold_str;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Error as SqlxError, Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

const QUESTION_COLUMNS: &str = "SELECT id, question, answer, difficulty, category FROM questions";

/// Gateway to the relational store.
///
/// Every read is a single statement; every mutation runs in its own
/// transaction. Errors are returned raw so callers decide how they surface.
#[derive(Clone)]
pub struct TriviaStore {
    pool: SqlitePool,
}

impl TriviaStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool against `database_url`, creating the SQLite file if needed.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, SqlxError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(connect_opts)
            .await?;
        debug!(database_url, max_connections, "store pool opened");
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), SqlxError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert the default categories, leaving existing rows untouched.
    pub async fn seed_categories(&self) -> Result<(), SqlxError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;
        for (id, kind) in DEFAULT_CATEGORIES {
            inserted += sqlx::query("INSERT OR IGNORE INTO categories (id, type) VALUES (?, ?)")
                .bind(id)
                .bind(kind)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }
        tx.commit().await?;
        info!(inserted, "default categories seeded");
        Ok(())
    }

    pub async fn insert_category(&self, id: i64, kind: &str) -> Result<(), SqlxError> {
        sqlx::query("INSERT INTO categories (id, type) VALUES (?, ?)")
            .bind(id)
            .bind(kind)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn categories(&self) -> Result<Vec<Category>, SqlxError> {
        sqlx::query_as("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn category_by_id(&self, id: i64) -> Result<Option<Category>, SqlxError> {
        sqlx::query_as("SELECT id, type FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn questions(&self) -> Result<Vec<Question>, SqlxError> {
        sqlx::query_as(&format!("{QUESTION_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await
    }

    pub async fn question_by_id(&self, id: i64) -> Result<Option<Question>, SqlxError> {
        sqlx::query_as(&format!("{QUESTION_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn questions_by_category(&self, category: i64) -> Result<Vec<Question>, SqlxError> {
        sqlx::query_as(&format!("{QUESTION_COLUMNS} WHERE category = ? ORDER BY id"))
            .bind(category)
            .fetch_all(&self.pool)
            .await
    }

    /// Questions whose text contains `term`, ignoring case.
    ///
    /// SQLite's `LIKE` folds ASCII only, so matching happens on the rows of a
    /// single ordered read using full Unicode case folding (`ß` == `SS`).
    pub async fn questions_matching(&self, term: &str) -> Result<Vec<Question>, SqlxError> {
        let needle = default_case_fold_str(term);
        let rows = self.questions().await?;
        Ok(rows
            .into_iter()
            .filter(|q| default_case_fold_str(&q.question).contains(&needle))
            .collect())
    }

    /// Insert in a single transaction. Returns the assigned id.
    pub async fn insert_question(&self, new: &NewQuestion) -> Result<i64, SqlxError> {
        let mut tx = self.pool.begin().await?;
        let id = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.difficulty)
        .bind(new.category)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();
        tx.commit().await?;
        Ok(id)
    }

    /// Delete in a single transaction. Returns the number of rows removed
    /// (zero when another caller deleted the row first).
    pub async fn delete_question(&self, id: i64) -> Result<u64, SqlxError> {
        let mut tx = self.pool.begin().await?;
        let removed = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;
        Ok(removed)
    }
}
