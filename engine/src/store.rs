//! The record store contract.
//!
//! The engine never owns durable state. Everything it reads or writes goes
//! through a [`RecordStore`], which is expected to provide its own isolation
//! and atomic single-record writes. [`MemoryStore`](crate::MemoryStore) is the
//! in-process implementation; the server provides a PostgreSQL one.

use crate::{Category, CategoryId, NewQuestion, Question, QuestionId};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Error raised by a store backend.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct StoreError(Box<dyn std::error::Error + Send + Sync + 'static>);

impl StoreError {
    /// Wrap a backend error.
    pub fn new<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self(Box::new(source))
    }

    /// Build an error from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self(message.into())
    }
}

/// Result type for store calls.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Filters applied to question reads. Both are optional and combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionFilter {
    /// Case-insensitive substring of the question text
    pub search: Option<String>,
    /// Exact category reference
    pub category: Option<CategoryId>,
}

impl QuestionFilter {
    /// Match every question.
    pub fn all() -> Self {
        Self::default()
    }

    /// Match questions in one category.
    pub fn category(id: CategoryId) -> Self {
        Self {
            search: None,
            category: Some(id),
        }
    }

    /// Match questions whose text contains `term`.
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            category: None,
        }
    }

    /// Evaluate the filter against a question in memory.
    pub fn matches(&self, question: &Question) -> bool {
        if let Some(category) = self.category {
            if question.category != category {
                return false;
            }
        }
        match &self.search {
            Some(term) => question.matches_lowercase(&term.to_lowercase()),
            None => true,
        }
    }
}

/// Durable storage of questions and categories.
///
/// Every question read is ordered by ascending id. Futures are `Send` so a
/// store can be driven from a multi-threaded runtime.
pub trait RecordStore: Send + Sync {
    /// All categories, ordered by id.
    fn categories(&self) -> impl Future<Output = StoreResult<Vec<Category>>> + Send;

    /// Look up one category.
    fn category(&self, id: CategoryId)
        -> impl Future<Output = StoreResult<Option<Category>>> + Send;

    /// Look up one question.
    fn question(&self, id: QuestionId)
        -> impl Future<Output = StoreResult<Option<Question>>> + Send;

    /// Ordered range read.
    ///
    /// Returns at most `limit` matching questions starting at `offset`, and
    /// the total number of matching questions before pagination.
    fn question_range(
        &self,
        filter: &QuestionFilter,
        offset: u64,
        limit: u64,
    ) -> impl Future<Output = StoreResult<(Vec<Question>, u64)>> + Send;

    /// Every matching question.
    fn questions(
        &self,
        filter: &QuestionFilter,
    ) -> impl Future<Output = StoreResult<Vec<Question>>> + Send;

    /// Insert a question and return its assigned id.
    fn insert_question(
        &self,
        question: &NewQuestion,
    ) -> impl Future<Output = StoreResult<QuestionId>> + Send;

    /// Delete a question. Returns `false` if no such question existed.
    fn delete_question(&self, id: QuestionId) -> impl Future<Output = StoreResult<bool>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: QuestionId, text: &str, category: CategoryId) -> Question {
        Question {
            id,
            question: text.into(),
            answer: "answer".into(),
            category,
            difficulty: 1,
        }
    }

    #[test]
    fn filter_all_matches_everything() {
        let filter = QuestionFilter::all();
        assert!(filter.matches(&question(1, "anything", 1)));
    }

    #[test]
    fn filter_combines_search_and_category() {
        let filter = QuestionFilter {
            search: Some("TITLE".into()),
            category: Some(4),
        };

        assert!(filter.matches(&question(1, "Whose autobiography is entitled...", 4)));
        assert!(!filter.matches(&question(2, "Whose autobiography is entitled...", 5)));
        assert!(!filter.matches(&question(3, "Who painted the Mona Lisa?", 4)));
    }

    #[test]
    fn store_error_wraps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "socket closed");
        let err = StoreError::new(io);
        assert_eq!(err.to_string(), "socket closed");

        let err = StoreError::msg("pool timed out");
        assert_eq!(err.to_string(), "pool timed out");
    }
}
