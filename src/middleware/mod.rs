pub mod extract;

pub use extract::{IdPath, Page, TriviaJson};
