//! Question and category records.

use crate::{CategoryId, Difficulty, QuestionId};
use serde::{Deserialize, Serialize};

/// A labeled grouping of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,
    /// Display label, e.g. "Science"
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    /// Create a new category.
    pub fn new(id: CategoryId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// A quiz item stored in the question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier, assigned by the store on creation
    pub id: QuestionId,
    /// Question text
    pub question: String,
    /// Answer text
    pub answer: String,
    /// Category reference; not checked against existing categories
    pub category: CategoryId,
    /// Expected range 1-5, not enforced
    pub difficulty: Difficulty,
}

impl Question {
    /// Attach a store-assigned id to a validated insert payload.
    pub fn from_new(id: QuestionId, new: NewQuestion) -> Self {
        Self {
            id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        }
    }

    /// Case-insensitive substring match against the question text.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.question.to_lowercase().contains(needle)
    }
}

/// A validated question ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: Difficulty,
}

/// Raw create input. Every field is required; see
/// [`mutation::create_question`](crate::mutation::create_question).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<CategoryId>,
    pub difficulty: Option<Difficulty>,
}

impl QuestionDraft {
    /// A draft with every field filled in.
    pub fn complete(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
            category: Some(category),
            difficulty: Some(difficulty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_serializes_label_as_type() {
        let category = Category::new(1, "Science");
        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(value, json!({"id": 1, "type": "Science"}));

        let parsed: Category = serde_json::from_value(json!({"id": 4, "type": "History"})).unwrap();
        assert_eq!(parsed, Category::new(4, "History"));
    }

    #[test]
    fn question_from_new() {
        let new = NewQuestion {
            question: "Largest country in South America".into(),
            answer: "Brazil".into(),
            category: 3,
            difficulty: 2,
        };
        let question = Question::from_new(24, new);

        assert_eq!(question.id, 24);
        assert_eq!(question.answer, "Brazil");
        assert_eq!(question.category, 3);
    }

    #[test]
    fn substring_match_ignores_case() {
        let question = Question::from_new(
            1,
            NewQuestion {
                question: "Which country won the first World Cup?".into(),
                answer: "Uruguay".into(),
                category: 6,
                difficulty: 3,
            },
        );

        assert!(question.matches_lowercase("world"));
        assert!(question.matches_lowercase("cup?"));
        assert!(!question.matches_lowercase("olympics"));
    }

    #[test]
    fn draft_deserializes_with_missing_fields() {
        let draft: QuestionDraft = serde_json::from_value(json!({"difficult": "asdasf"})).unwrap();
        assert_eq!(draft, QuestionDraft::default());

        let draft: QuestionDraft = serde_json::from_value(json!({
            "question": "Q",
            "answer": "A",
            "category": 2,
            "difficulty": 5
        }))
        .unwrap();
        assert_eq!(draft, QuestionDraft::complete("Q", "A", 2, 5));
    }
}
