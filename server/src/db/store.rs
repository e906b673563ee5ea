//! PostgreSQL record store for questions and categories.

use sqlx::{PgPool, Row};
use trivia_engine::{
    Category, CategoryId, NewQuestion, Question, QuestionFilter, QuestionId, RecordStore,
    StoreError, StoreResult,
};

/// A stored category row from the database.
#[derive(Debug)]
pub struct StoredCategory {
    pub id: i64,
    pub kind: String,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for StoredCategory {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(StoredCategory {
            id: row.try_get("id")?,
            kind: row.try_get("type")?,
        })
    }
}

impl From<StoredCategory> for Category {
    fn from(row: StoredCategory) -> Self {
        Category::new(row.id, row.kind)
    }
}

/// A stored question row from the database.
#[derive(Debug)]
pub struct StoredQuestion {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for StoredQuestion {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(StoredQuestion {
            id: row.try_get("id")?,
            question: row.try_get("question")?,
            answer: row.try_get("answer")?,
            category: row.try_get("category")?,
            difficulty: row.try_get("difficulty")?,
        })
    }
}

impl From<StoredQuestion> for Question {
    fn from(row: StoredQuestion) -> Self {
        Question {
            id: row.id,
            question: row.question,
            answer: row.answer,
            category: row.category,
            difficulty: row.difficulty,
        }
    }
}

/// Shared WHERE clause for filtered question reads.
///
/// `$1` is an ILIKE pattern or NULL, `$2` a category id or NULL.
const QUESTION_FILTER: &str = r#"
    ($1::text IS NULL OR question ILIKE $1 ESCAPE '\')
    AND ($2::bigint IS NULL OR category = $2)
"#;

/// Build an ILIKE pattern matching `term` anywhere, with wildcards escaped.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Isolation for multi-statement reads.
const SNAPSHOT_ISOLATION: &str = "SET TRANSACTION ISOLATION LEVEL REPEATABLE READ";

fn page_sql() -> String {
    format!(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE {}
        ORDER BY id ASC
        LIMIT $3 OFFSET $4
        "#,
        QUESTION_FILTER
    )
}

fn count_sql() -> String {
    format!("SELECT COUNT(*) FROM questions WHERE {}", QUESTION_FILTER)
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// [`RecordStore`] backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl RecordStore for PgStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, StoredCategory>(
            r#"SELECT id, type FROM categories ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::new)?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn category(&self, id: CategoryId) -> StoreResult<Option<Category>> {
        let row = sqlx::query_as::<_, StoredCategory>(
            r#"SELECT id, type FROM categories WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::new)?;

        Ok(row.map(Category::from))
    }

    async fn question(&self, id: QuestionId) -> StoreResult<Option<Question>> {
        let row = sqlx::query_as::<_, StoredQuestion>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::new)?;

        Ok(row.map(Question::from))
    }

    async fn question_range(
        &self,
        filter: &QuestionFilter,
        offset: u64,
        limit: u64,
    ) -> StoreResult<(Vec<Question>, u64)> {
        let pattern = filter.search.as_deref().map(like_pattern);

        // Page and count must observe the same snapshot.
        let mut tx = self.pool.begin().await.map_err(StoreError::new)?;
        sqlx::query(SNAPSHOT_ISOLATION)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::new)?;

        let page_sql = page_sql();
        let rows = sqlx::query_as::<_, StoredQuestion>(&page_sql)
            .bind(pattern.as_deref())
            .bind(filter.category)
            .bind(to_i64(limit))
            .bind(to_i64(offset))
            .fetch_all(&mut *tx)
            .await
            .map_err(StoreError::new)?;

        let count_sql = count_sql();
        let (total,): (i64,) = sqlx::query_as(&count_sql)
            .bind(pattern.as_deref())
            .bind(filter.category)
            .fetch_one(&mut *tx)
            .await
            .map_err(StoreError::new)?;

        tx.commit().await.map_err(StoreError::new)?;

        let questions = rows.into_iter().map(Question::from).collect();
        Ok((questions, total.max(0) as u64))
    }

    async fn questions(&self, filter: &QuestionFilter) -> StoreResult<Vec<Question>> {
        let pattern = filter.search.as_deref().map(like_pattern);

        let sql = format!(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE {}
            ORDER BY id ASC
            "#,
            QUESTION_FILTER
        );
        let rows = sqlx::query_as::<_, StoredQuestion>(&sql)
            .bind(pattern.as_deref())
            .bind(filter.category)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::new)?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn insert_question(&self, question: &NewQuestion) -> StoreResult<QuestionId> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::new)?;

        Ok(id)
    }

    async fn delete_question(&self, id: QuestionId) -> StoreResult<bool> {
        let result = sqlx::query(r#"DELETE FROM questions WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::new)?;

        Ok(result.rows_affected() > 0)
    }
}
