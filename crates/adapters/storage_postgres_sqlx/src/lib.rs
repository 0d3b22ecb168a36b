//! # quotesvc-adapter-storage-postgres-sqlx
//!
//! `PostgreSQL` persistence adapter built on [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Open and hold the connection pool ([`Config`] / [`Database`])
//! - Implement the [`QuoteRepository`](quotesvc_app::ports::QuoteRepository)
//!   port against the `quotes` table
//! - Classify driver-level failures into the domain error taxonomy
//!   (unique violation → `AlreadyExists`, empty random pick → `NoQuotes`)
//!
//! ## Dependency rule
//! Depends on `quotesvc-app` (for the port trait) and `quotesvc-domain`
//! (for domain types). Never leaks sqlx types into the domain.

pub mod error;
pub mod pool;
pub mod quote_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use quote_repo::PgQuoteRepository;
