//! # Trivia Engine
//!
//! Query and quiz selection logic for a trivia question bank.
//!
//! This crate turns request parameters into ordered, paginated and filtered
//! pages of questions, and picks the next quiz question without repeating
//! any question a player has already seen.
//!
//! ## Design Principles
//!
//! - **No IO**: Storage is reached only through the [`RecordStore`] trait
//! - **Stateless**: Nothing is retained between calls except in the store
//! - **Reproducible**: Randomness is injected, so tests can seed it
//! - **Bounded**: Quiz selection filters its pool up front and always terminates
//!
//! ## Core Concepts
//!
//! ### Records
//!
//! - [`Question`] - text, answer, category reference, difficulty
//! - [`Category`] - id and display label
//!
//! ### Queries
//!
//! [`PageParams`] carries raw `limit`, `page` and `search` input and resolves
//! into a validated [`PageQuery`]. Pages are always ordered by ascending id.
//!
//! ### Quizzes
//!
//! [`QuizScope`] selects all questions or one category. Given the ids already
//! served, the selector yields a [`QuizOutcome`]: a fresh question, or
//! [`QuizOutcome::Exhausted`] when nothing is left. Exhaustion is a normal end
//! of quiz, not an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use trivia_engine::{
//!     Category, MemoryStore, PageParams, QuestionBank, QuestionDraft, QuizScope,
//! };
//! use rand::{rngs::StdRng, SeedableRng};
//! use std::collections::HashSet;
//!
//! # tokio_test_block_on(async {
//! // 1. Create a store and a bank over it
//! let store = MemoryStore::with_records(vec![Category::new(1, "Science")], vec![]);
//! let bank = QuestionBank::new(store);
//!
//! // 2. Add a question
//! let draft = QuestionDraft::complete("What is the heaviest organ?", "The liver", 1, 4);
//! let created = bank.create_question(draft, &PageParams::default()).await.unwrap();
//! assert_eq!(created.page.total, 1);
//!
//! // 3. Page through questions
//! let page = bank.list_questions(&PageParams::new(1, 10)).await.unwrap();
//! assert_eq!(page.questions[0].answer, "The liver");
//!
//! // 4. Play a quiz
//! let mut rng = StdRng::seed_from_u64(7);
//! let served: HashSet<_> = [created.id].into_iter().collect();
//! let outcome = bank.next_quiz_question(QuizScope::All, &served, &mut rng).await.unwrap();
//! assert!(outcome.is_exhausted());
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

pub mod bank;
pub mod category;
pub mod error;
pub mod memory;
pub mod model;
pub mod mutation;
pub mod pagination;
pub mod query;
pub mod quiz;
pub mod store;

// Re-export main types at crate root
pub use bank::{Created, Deleted, QuestionBank};
pub use category::CategoryPage;
pub use error::{Error, ErrorKind};
pub use memory::MemoryStore;
pub use model::{Category, NewQuestion, Question, QuestionDraft};
pub use pagination::QuestionPage;
pub use query::{PageParams, PageQuery, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use quiz::{QuizOutcome, QuizScope};
pub use store::{QuestionFilter, RecordStore, StoreError, StoreResult};

/// Type aliases for clarity
pub type QuestionId = i64;
pub type CategoryId = i64;
pub type Difficulty = i32;
