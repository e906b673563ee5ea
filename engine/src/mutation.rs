//! Question creation and deletion.
//!
//! Validation happens before the store is touched. Store failures during a
//! write surface as [`Error::MutationFailed`], never as raw store errors.

use crate::store::RecordStore;
use crate::{error::Result, Error, NewQuestion, QuestionDraft, QuestionId};

/// Validate a draft into an insertable question.
///
/// Every field is required. Question and answer text must not be blank.
pub fn validate(draft: QuestionDraft) -> Result<NewQuestion> {
    let question = required_text("question", draft.question)?;
    let answer = required_text("answer", draft.answer)?;
    let category = draft.category.ok_or(Error::MissingField("category"))?;
    let difficulty = draft.difficulty.ok_or(Error::MissingField("difficulty"))?;

    Ok(NewQuestion {
        question,
        answer,
        category,
        difficulty,
    })
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(Error::MissingField(field)),
    }
}

/// Validate and insert a question, returning its assigned id.
pub async fn create_question<S: RecordStore>(store: &S, draft: QuestionDraft) -> Result<QuestionId> {
    let new = validate(draft)?;
    store
        .insert_question(&new)
        .await
        .map_err(Error::MutationFailed)
}

/// Delete question `id`.
///
/// A missing question fails with [`Error::QuestionNotFound`], which
/// classifies as unprocessable input.
pub async fn delete_question<S: RecordStore>(store: &S, id: QuestionId) -> Result<QuestionId> {
    let existing = store.question(id).await.map_err(Error::MutationFailed)?;
    if existing.is_none() {
        return Err(Error::QuestionNotFound(id));
    }

    // Another writer may have removed it since the lookup.
    let removed = store
        .delete_question(id)
        .await
        .map_err(Error::MutationFailed)?;
    if !removed {
        return Err(Error::QuestionNotFound(id));
    }

    Ok(id)
}
