//! `PostgreSQL` implementation of [`QuoteRepository`].

use std::future::Future;

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};

use quotesvc_app::ports::QuoteRepository;
use quotesvc_domain::error::QuoteError;
use quotesvc_domain::id::QuoteId;
use quotesvc_domain::quote::Quote;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Quote`].
struct Wrapper(Quote);

impl<'r> FromRow<'r, PgRow> for Wrapper {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let id: uuid::Uuid = row.try_get("id")?;
        let author: String = row.try_get("author")?;
        let quote: String = row.try_get("quote")?;

        Ok(Self(Quote {
            id: QuoteId::from_uuid(id),
            author,
            quote,
        }))
    }
}

const INSERT: &str = "INSERT INTO quotes (id, author, quote) VALUES ($1, $2, $3)";
const DELETE_BY_ID: &str = "DELETE FROM quotes WHERE id = $1";
const SELECT_ALL: &str = "SELECT id, author, quote FROM quotes";
const SELECT_BY_AUTHOR: &str = "SELECT id, author, quote FROM quotes WHERE author = $1";
const SELECT_RANDOM: &str = "SELECT id, author, quote FROM quotes ORDER BY random() LIMIT 1";

/// `PostgreSQL`-backed quote repository.
pub struct PgQuoteRepository {
    pool: PgPool,
}

impl PgQuoteRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl QuoteRepository for PgQuoteRepository {
    fn create(&self, quote: Quote) -> impl Future<Output = Result<Quote, QuoteError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(quote.id.as_uuid())
                .bind(&quote.author)
                .bind(&quote.quote)
                .execute(&pool)
                .await
                .map_err(|err| {
                    if let sqlx::Error::Database(db_err) = &err {
                        if db_err.is_unique_violation() {
                            return QuoteError::AlreadyExists;
                        }
                    }
                    StorageError::from(err).into()
                })?;

            if result.rows_affected() == 0 {
                return Err(QuoteError::AlreadyExists);
            }

            Ok(quote)
        }
    }

    fn delete_by_id(&self, id: QuoteId) -> impl Future<Output = Result<(), QuoteError>> + Send {
        let pool = self.pool.clone();
        async move {
            // Zero rows matched is fine: delete is idempotent.
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_uuid())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn list_with_filter(
        &self,
        author: Option<String>,
    ) -> impl Future<Output = Result<Vec<Quote>, QuoteError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = match author {
                Some(author) => {
                    sqlx::query_as(SELECT_BY_AUTHOR)
                        .bind(author)
                        .fetch_all(&pool)
                        .await
                }
                None => sqlx::query_as(SELECT_ALL).fetch_all(&pool).await,
            }
            .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_random(&self) -> impl Future<Output = Result<Quote, QuoteError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_RANDOM)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            row.map(|w| w.0).ok_or(QuoteError::NoQuotes)
        }
    }
}
