//! In-memory record store.
//!
//! Holds categories and questions in ordered maps behind a shared lock.
//! Cloning a [`MemoryStore`] yields another handle onto the same state.

use crate::store::{QuestionFilter, RecordStore, StoreError, StoreResult};
use crate::{Category, CategoryId, NewQuestion, Question, QuestionId};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    last_id: QuestionId,
}

/// A [`RecordStore`] kept entirely in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with categories and questions.
    ///
    /// Question ids are kept as given; later inserts continue after the
    /// highest one.
    pub fn with_records(
        categories: impl IntoIterator<Item = Category>,
        questions: impl IntoIterator<Item = Question>,
    ) -> Self {
        let mut tables = Tables::default();
        for category in categories {
            tables.categories.insert(category.id, category);
        }
        for question in questions {
            tables.last_id = tables.last_id.max(question.id);
            tables.questions.insert(question.id, question);
        }
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    /// Add or replace a category.
    pub fn put_category(&self, category: Category) -> StoreResult<()> {
        self.write()?.categories.insert(category.id, category);
        Ok(())
    }

    /// Number of stored questions.
    pub fn question_count(&self) -> StoreResult<usize> {
        Ok(self.read()?.questions.len())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StoreError::msg("memory store lock poisoned"))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StoreError::msg("memory store lock poisoned"))
    }

    fn matching(&self, filter: &QuestionFilter) -> StoreResult<Vec<Question>> {
        let tables = self.read()?;

        Ok(tables
            .questions
            .values()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect())
    }
}

impl RecordStore for MemoryStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    async fn category(&self, id: CategoryId) -> StoreResult<Option<Category>> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    async fn question(&self, id: QuestionId) -> StoreResult<Option<Question>> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    async fn question_range(
        &self,
        filter: &QuestionFilter,
        offset: u64,
        limit: u64,
    ) -> StoreResult<(Vec<Question>, u64)> {
        let matching = self.matching(filter)?;
        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect();
        Ok((page, total))
    }

    async fn questions(&self, filter: &QuestionFilter) -> StoreResult<Vec<Question>> {
        self.matching(filter)
    }

    async fn insert_question(&self, question: &NewQuestion) -> StoreResult<QuestionId> {
        let mut tables = self.write()?;
        let id = tables
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::msg("question id space exhausted"))?;
        tables.last_id = id;
        tables
            .questions
            .insert(id, Question::from_new(id, question.clone()));
        Ok(id)
    }

    async fn delete_question(&self, id: QuestionId) -> StoreResult<bool> {
        Ok(self.write()?.questions.remove(&id).is_some())
    }
}
