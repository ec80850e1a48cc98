pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod pagination;
pub mod router;
pub mod service;
pub mod types;

pub use error::TriviaError;
pub use router::{TriviaState, trivia_router};
