//! Category handlers - list categories and the questions inside one.

use crate::error::Result;
use serde::Serialize;
use trivia_engine::{Category, CategoryId, PageParams, Question, QuestionBank, RecordStore};

/// Response for listing categories.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<Category>,
    pub total_categories: usize,
}

/// Response for listing the questions in a category.
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub category: CategoryId,
    pub total_questions: u64,
}

/// List every category.
pub async fn handle_list_categories<S: RecordStore>(
    bank: &QuestionBank<S>,
) -> Result<CategoriesResponse> {
    let categories = bank.list_categories().await?;

    Ok(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    })
}

/// List one page of the questions in category `id`.
pub async fn handle_category_questions<S: RecordStore>(
    bank: &QuestionBank<S>,
    id: CategoryId,
    params: PageParams,
) -> Result<CategoryQuestionsResponse> {
    let result = bank.category_questions(id, &params).await?;

    Ok(CategoryQuestionsResponse {
        success: true,
        questions: result.page.questions,
        category: result.category.id,
        total_questions: result.page.total,
    })
}
