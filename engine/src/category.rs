//! Category filtering.
//!
//! Same pagination semantics as [`fetch_page`](crate::pagination::fetch_page)
//! with an additional equality filter on the category reference. The category
//! itself must exist.

use crate::pagination::{fetch_filtered, QuestionPage};
use crate::store::{QuestionFilter, RecordStore};
use crate::{error::Result, Category, CategoryId, Error, PageQuery};
use serde::{Deserialize, Serialize};

/// A page of questions from a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPage {
    pub category: Category,
    pub page: QuestionPage,
}

/// Fetch one page of the questions in category `id`.
///
/// Fails with [`Error::CategoryNotFound`] if the category does not exist.
/// `total` counts only that category's questions, independent of the limit.
/// A search term on `query`, if any, narrows the page further.
pub async fn category_page<S: RecordStore>(
    store: &S,
    id: CategoryId,
    query: &PageQuery,
) -> Result<CategoryPage> {
    let category = store
        .category(id)
        .await?
        .ok_or(Error::CategoryNotFound(id))?;

    let filter = QuestionFilter {
        search: query.search.clone(),
        category: Some(id),
    };
    let page = fetch_filtered(store, &filter, query).await?;

    Ok(CategoryPage { category, page })
}
