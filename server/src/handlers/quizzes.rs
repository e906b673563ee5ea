//! Quiz handler - serves the next unseen question.

use crate::error::{AppError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use trivia_engine::{CategoryId, Question, QuestionBank, QuestionId, QuizScope, RecordStore};

/// Category a quiz is played in. Id `0` means every category.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "category_id")]
    pub id: CategoryId,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Request body for the next quiz question.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Ids already served in this quiz
    #[serde(default)]
    pub previous_questions: Vec<QuestionId>,
    pub quiz_category: Option<QuizCategory>,
}

/// Response for the next quiz question.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// `None` once every question in scope has been served
    pub question: Option<Question>,
    pub exhausted: bool,
}

/// Pick the next quiz question.
pub async fn handle_quiz<S: RecordStore>(
    bank: &QuestionBank<S>,
    request: QuizRequest,
) -> Result<QuizResponse> {
    let category = request
        .quiz_category
        .ok_or_else(|| AppError::NotFound("quiz_category is required".to_string()))?;
    let scope = QuizScope::from_category_id(category.id);
    let served: HashSet<QuestionId> = request.previous_questions.into_iter().collect();

    let mut rng = StdRng::from_entropy();
    let outcome = bank.next_quiz_question(scope, &served, &mut rng).await?;

    if outcome.is_exhausted() {
        tracing::debug!(
            "Quiz in {:?} exhausted after {} questions",
            scope,
            served.len()
        );
    }

    Ok(QuizResponse {
        success: true,
        exhausted: outcome.is_exhausted(),
        question: outcome.into_question(),
    })
}

/// Accept a category id as either a number or a numeric string.
fn category_id<'de, D>(deserializer: D) -> std::result::Result<CategoryId, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(CategoryId),
        Text(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Number(id) => Ok(id),
        Repr::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
