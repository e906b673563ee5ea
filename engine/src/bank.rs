//! The question bank: every externally visible operation in one place.
//!
//! [`QuestionBank`] wraps a [`RecordStore`] and applies the request-level
//! policies on top of the building blocks in [`pagination`](crate::pagination),
//! [`category`](crate::category), [`quiz`](crate::quiz) and
//! [`mutation`](crate::mutation):
//!
//! - Pagination input is resolved before any store access
//! - Listing questions fails with [`Error::EmptyPage`] when the page is empty
//! - An explicit search with no matches is an empty success
//! - Mutations answer with a refreshed, unfiltered page

use crate::category::{self, CategoryPage};
use crate::pagination::{self, QuestionPage};
use crate::quiz::{self, QuizOutcome, QuizScope};
use crate::store::RecordStore;
use crate::{
    error::Result, mutation, Category, CategoryId, Error, PageParams, QuestionDraft, QuestionId,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Result of creating a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    pub id: QuestionId,
    pub page: QuestionPage,
}

/// Result of deleting a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub id: QuestionId,
    pub page: QuestionPage,
}

/// Question bank operations over a record store.
#[derive(Debug, Clone)]
pub struct QuestionBank<S> {
    store: S,
}

impl<S: RecordStore> QuestionBank<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// All categories, ordered by id.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let categories = self.store.categories().await?;
        if categories.is_empty() {
            return Err(Error::NoCategories);
        }
        Ok(categories)
    }

    /// One page of questions, optionally filtered by `params.search`.
    ///
    /// An empty page, including any page past the end, is [`Error::EmptyPage`].
    pub async fn list_questions(&self, params: &PageParams) -> Result<QuestionPage> {
        let query = params.resolve()?;
        let page = pagination::fetch_page(&self.store, &query).await?;
        if page.is_empty() {
            return Err(Error::EmptyPage(query.page));
        }
        Ok(page)
    }

    /// Questions whose text contains `term`, case-insensitively.
    ///
    /// Any search term in `params` is ignored in favour of `term`.
    pub async fn search_questions(&self, term: &str, params: &PageParams) -> Result<QuestionPage> {
        if term.trim().is_empty() {
            return Err(Error::invalid("search", "search term must not be blank"));
        }
        let query = params.resolve()?.searching(term);
        pagination::fetch_page(&self.store, &query).await
    }

    /// Create a question and return its id with a refreshed page.
    pub async fn create_question(
        &self,
        draft: QuestionDraft,
        params: &PageParams,
    ) -> Result<Created> {
        let query = params.resolve()?.unfiltered();
        let id = mutation::create_question(&self.store, draft).await?;
        let page = pagination::fetch_page(&self.store, &query).await?;
        Ok(Created { id, page })
    }

    /// Delete a question and return its id with a refreshed page.
    pub async fn delete_question(&self, id: QuestionId, params: &PageParams) -> Result<Deleted> {
        let query = params.resolve()?.unfiltered();
        let id = mutation::delete_question(&self.store, id).await?;
        let page = pagination::fetch_page(&self.store, &query).await?;
        Ok(Deleted { id, page })
    }

    /// One page of the questions in category `id`.
    pub async fn category_questions(
        &self,
        id: CategoryId,
        params: &PageParams,
    ) -> Result<CategoryPage> {
        let query = params.resolve()?;
        category::category_page(&self.store, id, &query).await
    }

    /// Pick the next unserved quiz question in `scope`.
    pub async fn next_quiz_question<R>(
        &self,
        scope: QuizScope,
        served: &HashSet<QuestionId>,
        rng: &mut R,
    ) -> Result<QuizOutcome>
    where
        R: Rng + ?Sized,
    {
        quiz::next_question(&self.store, scope, served, rng).await
    }
}
