//! Pagination and search execution.
//!
//! Turns a validated [`PageQuery`] into one ordered page of questions. Order
//! is always ascending by id, so repeated reads of the same page return the
//! same questions as long as nothing is mutated in between.

use crate::store::{QuestionFilter, RecordStore};
use crate::{error::Result, PageQuery, Question};
use serde::{Deserialize, Serialize};

/// One page of questions and the number of matches across all pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total: u64,
}

impl QuestionPage {
    /// Whether this page holds no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of pages needed to show `total` questions at `limit` per page.
    pub fn page_count(&self, limit: u64) -> u64 {
        if limit == 0 {
            return 0;
        }
        self.total.div_ceil(limit)
    }
}

/// Fetch the page described by `query`, restricted by its search term if set.
///
/// An offset past the last match yields an empty page, not an error.
pub async fn fetch_page<S: RecordStore>(store: &S, query: &PageQuery) -> Result<QuestionPage> {
    let filter = QuestionFilter {
        search: query.search.clone(),
        category: None,
    };
    fetch_filtered(store, &filter, query).await
}

/// Fetch one page of questions matching `filter`.
pub(crate) async fn fetch_filtered<S: RecordStore>(
    store: &S,
    filter: &QuestionFilter,
    query: &PageQuery,
) -> Result<QuestionPage> {
    let (questions, total) = store
        .question_range(filter, query.offset, query.limit)
        .await?;
    Ok(QuestionPage { questions, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, MemoryStore, PageParams};

    fn store_with(count: i64) -> MemoryStore {
        let questions = (1..=count).map(|id| Question {
            id,
            question: if id % 3 == 0 {
                format!("What is the title of book {}?", id)
            } else {
                format!("Question number {}", id)
            },
            answer: format!("Answer {}", id),
            category: 1 + id % 2,
            difficulty: 1,
        });
        MemoryStore::with_records(vec![Category::new(1, "Science")], questions)
    }

    fn ids(page: &QuestionPage) -> Vec<i64> {
        page.questions.iter().map(|q| q.id).collect()
    }

    #[tokio::test]
    async fn first_page_in_id_order() {
        let store = store_with(25);
        let query = PageParams::default().resolve().unwrap();

        let page = fetch_page(&store, &query).await.unwrap();
        assert_eq!(ids(&page), (1..=10).collect::<Vec<_>>());
        assert_eq!(page.total, 25);
        assert_eq!(page.page_count(query.limit), 3);
    }

    #[tokio::test]
    async fn last_partial_page() {
        let store = store_with(25);
        let query = PageParams::new(3, 10).resolve().unwrap();

        let page = fetch_page(&store, &query).await.unwrap();
        assert_eq!(ids(&page), (21..=25).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn page_beyond_data_is_empty() {
        let store = store_with(5);
        let query = PageParams::new(50000, 10).resolve().unwrap();

        let page = fetch_page(&store, &query).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total, 5);
    }

    #[tokio::test]
    async fn search_filters_before_paginating() {
        let store = store_with(30);
        let query = PageParams::new(1, 4).with_search("TITLE").resolve().unwrap();

        let page = fetch_page(&store, &query).await.unwrap();
        assert_eq!(ids(&page), vec![3, 6, 9, 12]);
        assert_eq!(page.total, 10);

        let query = PageParams::new(3, 4).with_search("title").resolve().unwrap();
        let page = fetch_page(&store, &query).await.unwrap();
        assert_eq!(ids(&page), vec![27, 30]);
    }

    #[tokio::test]
    async fn search_without_matches() {
        let store = store_with(10);
        let query = PageParams::default()
            .with_search("qwerertetyrt")
            .resolve()
            .unwrap();

        let page = fetch_page(&store, &query).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn repeated_reads_are_stable() {
        let store = store_with(40);
        let query = PageParams::new(2, 7).resolve().unwrap();

        let first = fetch_page(&store, &query).await.unwrap();
        let second = fetch_page(&store, &query).await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn page_count_rounds_up() {
        let page = QuestionPage {
            questions: vec![],
            total: 21,
        };
        assert_eq!(page.page_count(10), 3);
        assert_eq!(page.page_count(21), 1);
        assert_eq!(page.page_count(0), 0);
    }
}
