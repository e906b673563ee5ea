//! PostgreSQL store tests.
//!
//! These need a live database: set DATABASE_URL before running. Without it
//! each test returns early.

use trivia_engine::{NewQuestion, QuestionFilter, RecordStore};
use trivia_server::db::{create_pool, run_migrations, PgStore};

async fn connect() -> Option<PgStore> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = create_pool(&url, 8).await.expect("connect");
    run_migrations(&pool).await.expect("migrate");
    Some(PgStore::new(pool))
}

fn tagged(tag: &str, n: usize) -> NewQuestion {
    NewQuestion {
        question: format!("{} question {}", tag, n),
        answer: "answer".into(),
        category: 1,
        difficulty: 1,
    }
}

async fn cleanup(store: &PgStore, tag: &str) {
    for q in store
        .questions(&QuestionFilter::search(tag))
        .await
        .expect("questions")
    {
        store.delete_question(q.id).await.expect("delete");
    }
}

#[tokio::test]
async fn range_total_matches_page_under_concurrent_inserts() {
    let Some(store) = connect().await else {
        return;
    };
    let tag = "range-consistency-3f9c";
    cleanup(&store, tag).await;

    let writer = {
        let store = store.clone();
        tokio::spawn(async move {
            for n in 0..200 {
                store.insert_question(&tagged(tag, n)).await.expect("insert");
            }
        })
    };

    let filter = QuestionFilter::search(tag);
    for _ in 0..200 {
        let (page, total) = store
            .question_range(&filter, 0, i64::MAX as u64)
            .await
            .expect("range");
        assert_eq!(page.len() as u64, total);
    }

    writer.await.expect("writer");
    cleanup(&store, tag).await;
}

#[tokio::test]
async fn search_escapes_wildcards() {
    let Some(store) = connect().await else {
        return;
    };
    let tag = "wildcard-escape-8b21";
    cleanup(&store, tag).await;

    store
        .insert_question(&NewQuestion {
            question: format!("{} 100% sure", tag),
            ..tagged(tag, 0)
        })
        .await
        .expect("insert");
    store.insert_question(&tagged(tag, 1)).await.expect("insert");

    let (page, total) = store
        .question_range(&QuestionFilter::search(format!("{} 100%", tag)), 0, 10)
        .await
        .expect("range");
    assert_eq!(total, 1);
    assert!(page[0].question.ends_with("100% sure"));

    cleanup(&store, tag).await;
}
