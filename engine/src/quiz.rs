//! Quiz question selection.
//!
//! # Algorithm
//!
//! 1. Materialize every question in scope (all, or one category)
//! 2. Drop every question whose id the caller has already been served
//! 3. If nothing is left, the quiz is over
//! 4. Otherwise draw one remaining question uniformly at random
//!
//! The pool is computed up front, so selection always terminates and never
//! repeats a served question.

use crate::store::{QuestionFilter, RecordStore};
use crate::{error::Result, CategoryId, Question, QuestionId};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuizScope {
    /// Every question in the bank
    All,
    /// Only questions referencing this category
    Category(CategoryId),
}

impl QuizScope {
    /// Category id clients send to mean "all categories".
    pub const ALL_CATEGORIES: CategoryId = 0;

    /// Build a scope from a client-supplied category id, where `0` means all.
    pub fn from_category_id(id: CategoryId) -> Self {
        if id == Self::ALL_CATEGORIES {
            QuizScope::All
        } else {
            QuizScope::Category(id)
        }
    }

    /// Store filter selecting this scope's questions.
    pub fn filter(&self) -> QuestionFilter {
        match self {
            QuizScope::All => QuestionFilter::all(),
            QuizScope::Category(id) => QuestionFilter::category(*id),
        }
    }
}

/// Result of asking for the next quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// A question not yet served in this quiz
    Question(Question),
    /// Every question in scope has been served
    Exhausted,
}

impl QuizOutcome {
    /// The selected question, if any.
    pub fn question(&self) -> Option<&Question> {
        match self {
            QuizOutcome::Question(question) => Some(question),
            QuizOutcome::Exhausted => None,
        }
    }

    /// Consume the outcome, returning the selected question if any.
    pub fn into_question(self) -> Option<Question> {
        match self {
            QuizOutcome::Question(question) => Some(question),
            QuizOutcome::Exhausted => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, QuizOutcome::Exhausted)
    }
}

/// Questions from `candidates` that have not been served.
pub fn eligible_pool(candidates: Vec<Question>, served: &HashSet<QuestionId>) -> Vec<Question> {
    candidates
        .into_iter()
        .filter(|q| !served.contains(&q.id))
        .collect()
}

/// Draw one unserved question from `candidates`.
///
/// Every eligible question is equally likely.
pub fn draw<R>(
    candidates: Vec<Question>,
    served: &HashSet<QuestionId>,
    rng: &mut R,
) -> QuizOutcome
where
    R: Rng + ?Sized,
{
    let mut pool = eligible_pool(candidates, served);
    if pool.is_empty() {
        return QuizOutcome::Exhausted;
    }
    let index = rng.gen_range(0..pool.len());
    QuizOutcome::Question(pool.swap_remove(index))
}

/// Pick the next question for a quiz in `scope`.
///
/// A category that does not exist simply has no questions, so the outcome is
/// [`QuizOutcome::Exhausted`] rather than an error.
pub async fn next_question<S, R>(
    store: &S,
    scope: QuizScope,
    served: &HashSet<QuestionId>,
    rng: &mut R,
) -> Result<QuizOutcome>
where
    S: RecordStore,
    R: Rng + ?Sized,
{
    let candidates = store.questions(&scope.filter()).await?;
    Ok(draw(candidates, served, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, MemoryStore};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn question(id: QuestionId, category: CategoryId) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            answer: format!("Answer {}", id),
            category,
            difficulty: 1,
        }
    }

    fn store() -> MemoryStore {
        MemoryStore::with_records(
            vec![Category::new(2, "Art"), Category::new(3, "Geography")],
            vec![question(1, 2), question(2, 2), question(3, 3)],
        )
    }

    fn served(ids: &[QuestionId]) -> HashSet<QuestionId> {
        ids.iter().copied().collect()
    }

    #[test]
    fn scope_from_wire_id() {
        assert_eq!(QuizScope::from_category_id(0), QuizScope::All);
        assert_eq!(QuizScope::from_category_id(4), QuizScope::Category(4));
    }

    #[tokio::test]
    async fn all_served_is_exhausted() {
        let mut rng = StdRng::seed_from_u64(7);
        let outcome = next_question(&store(), QuizScope::All, &served(&[1, 2, 3]), &mut rng)
            .await
            .unwrap();
        assert_eq!(outcome, QuizOutcome::Exhausted);
    }

    #[tokio::test]
    async fn single_remaining_question_is_returned() {
        let mut rng = StdRng::seed_from_u64(7);
        let outcome = next_question(&store(), QuizScope::All, &served(&[1, 3]), &mut rng)
            .await
            .unwrap();
        assert_eq!(outcome.question().map(|q| q.id), Some(2));
    }

    #[tokio::test]
    async fn category_scope_stays_in_category() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let outcome = next_question(&store(), QuizScope::Category(2), &served(&[]), &mut rng)
                .await
                .unwrap();
            assert_eq!(outcome.question().unwrap().category, 2);
        }

        let outcome = next_question(&store(), QuizScope::Category(2), &served(&[1, 2]), &mut rng)
            .await
            .unwrap();
        assert!(outcome.is_exhausted());
    }

    #[tokio::test]
    async fn unknown_category_is_exhausted() {
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = next_question(&store(), QuizScope::Category(99), &served(&[]), &mut rng)
            .await
            .unwrap();
        assert!(outcome.is_exhausted());
    }

    #[test]
    fn empty_bank_is_exhausted() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(draw(vec![], &served(&[]), &mut rng).is_exhausted());
    }

    #[test]
    fn same_seed_same_question() {
        let candidates: Vec<_> = (1..=50).map(|id| question(id, 1)).collect();

        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            draw(candidates.clone(), &served(&[]), &mut a),
            draw(candidates, &served(&[]), &mut b)
        );
    }

    #[test]
    fn draws_cover_whole_pool() {
        let candidates: Vec<_> = (1..=4).map(|id| question(id, 1)).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let mut counts: HashMap<QuestionId, usize> = HashMap::new();

        for _ in 0..4000 {
            let picked = draw(candidates.clone(), &served(&[2]), &mut rng)
                .into_question()
                .unwrap();
            *counts.entry(picked.id).or_default() += 1;
        }

        assert!(!counts.contains_key(&2));
        assert_eq!(counts.len(), 3);
        // Roughly uniform: each of the three ids lands near 1333.
        for count in counts.values() {
            assert!((1000..1700).contains(count), "{:?}", counts);
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_never_returns_served(
                total in 0i64..40,
                served_ids in proptest::collection::hash_set(1i64..40, 0..40),
                seed in any::<u64>(),
            ) {
                let candidates: Vec<_> = (1..=total).map(|id| question(id, 1)).collect();
                let eligible = candidates.iter().filter(|q| !served_ids.contains(&q.id)).count();
                let mut rng = StdRng::seed_from_u64(seed);

                match draw(candidates, &served_ids, &mut rng) {
                    QuizOutcome::Question(q) => {
                        prop_assert!(!served_ids.contains(&q.id));
                        prop_assert!(q.id >= 1 && q.id <= total);
                        prop_assert!(eligible > 0);
                    }
                    QuizOutcome::Exhausted => prop_assert_eq!(eligible, 0),
                }
            }
        }
    }
}
