//! Trivia Server - HTTP front end for the trivia question bank.
//!
//! Exposes category listing, question paging, search, creation, deletion and
//! quiz play over JSON, backed by any [`RecordStore`]. Production runs use
//! [`db::PgStore`]; tests run against [`trivia_engine::MemoryStore`].

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod routes;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use trivia_engine::{QuestionBank, RecordStore};

/// Application state shared across handlers.
pub struct AppState<S> {
    pub bank: Arc<QuestionBank<S>>,
}

impl<S: RecordStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            bank: Arc::new(QuestionBank::new(store)),
        }
    }
}

// Manual impl: cloning only bumps the Arc, so `S` need not be `Clone`.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            bank: Arc::clone(&self.bank),
        }
    }
}

/// Build the full application router with tracing and CORS layers.
pub fn app<S: RecordStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
