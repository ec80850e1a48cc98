#![allow(dead_code)]

use std::{
    fs,
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use trivia_nexus::db::{Question, TriviaStore};
use trivia_nexus::service::{QuestionDraft, QuestionRepository};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// A store backed by a throwaway SQLite file, removed on drop.
pub struct TempStore {
    pub store: TriviaStore,
    path: PathBuf,
}

impl TempStore {
    pub async fn open(max_connections: u32, seed: bool) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "trivia-test-{}-{}-{}.sqlite",
            std::process::id(),
            nanos,
            NEXT_DB.fetch_add(1, Ordering::Relaxed)
        ));

        let database_url = format!("sqlite:{}", path.display());
        let store = TriviaStore::connect(&database_url, max_connections)
            .await
            .expect("failed to open test store");
        store.init_schema().await.expect("failed to init schema");
        if seed {
            store
                .seed_categories()
                .await
                .expect("failed to seed categories");
        }
        Self { store, path }
    }

    pub async fn seeded() -> Self {
        Self::open(4, true).await
    }
}

impl Drop for TempStore {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm", "-journal"] {
            let _ = fs::remove_file(format!("{}{}", self.path.display(), suffix));
        }
    }
}

pub fn draft(question: &str, answer: &str, difficulty: i64, category: i64) -> QuestionDraft {
    QuestionDraft {
        question: Some(question.to_string()),
        answer: Some(answer.to_string()),
        difficulty: Some(difficulty),
        category: Some(category),
    }
}

pub async fn add(
    repo: &QuestionRepository,
    question: &str,
    answer: &str,
    difficulty: i64,
    category: i64,
) -> Question {
    repo.create(draft(question, answer, difficulty, category))
        .await
        .expect("failed to create question")
}

/// A small bank spread over the seeded categories (1 Science .. 6 Sports).
pub async fn add_sample_bank(repo: &QuestionRepository) -> Vec<Question> {
    let rows = [
        ("What is the heaviest organ in the human body?", "The Liver", 4, 1),
        ("Who discovered penicillin?", "Alexander Fleming", 3, 1),
        ("Hematology is a branch of medicine involving the study of what?", "Blood", 4, 1),
        (
            "Which Dutch graphic artist initials M C was a creator of optical illusions?",
            "Escher",
            1,
            2,
        ),
        ("La Giaconda is better known as what?", "Mona Lisa", 3, 2),
        ("What is the largest lake in Africa?", "Lake Victoria", 2, 3),
        (
            "In which royal palace would you find the Hall of Mirrors?",
            "The Palace of Versailles",
            3,
            3,
        ),
        ("The Taj Mahal is located in which Indian city?", "Agra", 2, 3),
        (
            "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
            "Maya Angelou",
            2,
            4,
        ),
        ("Which actor did Anne Rice first denounce, then praise as Lestat?", "Tom Cruise", 4, 5),
        (
            "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
            "Apollo 13",
            4,
            5,
        ),
        ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3, 6),
    ];
    let mut out = Vec::with_capacity(rows.len());
    for (q, a, d, c) in rows {
        out.push(add(repo, q, a, d, c).await);
    }
    out
}
