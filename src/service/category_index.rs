use crate::db::{Category, TriviaStore};
use crate::error::TriviaError;
use std::collections::BTreeMap;

/// Read-only view over the seeded categories.
#[derive(Clone)]
pub struct CategoryIndex {
    store: TriviaStore,
}

impl CategoryIndex {
    pub fn new(store: TriviaStore) -> Self {
        Self { store }
    }

    /// All categories ascending by id. Empty when none exist.
    pub async fn list_categories(&self) -> Result<Vec<Category>, TriviaError> {
        Ok(self.store.categories().await?)
    }

    pub async fn resolve(&self, id: i64) -> Result<Category, TriviaError> {
        self.store
            .category_by_id(id)
            .await?
            .ok_or_else(|| TriviaError::not_found("category", id))
    }

    /// id -> type, the shape listing responses expose.
    pub async fn as_map(&self) -> Result<BTreeMap<i64, String>, TriviaError> {
        Ok(self
            .list_categories()
            .await?
            .into_iter()
            .map(|c| (c.id, c.kind))
            .collect())
    }
}
