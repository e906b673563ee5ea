//! Request handlers for question bank operations.

mod categories;
mod questions;
mod quizzes;

pub use categories::*;
pub use questions::*;
pub use quizzes::*;
