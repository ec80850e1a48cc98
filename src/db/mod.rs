//! Database module: models, schema and the store gateway.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: `TriviaStore`, the only code that talks to the pool

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Category, NewQuestion, Question};
pub use sqlite::{SqlitePool, TriviaStore};
