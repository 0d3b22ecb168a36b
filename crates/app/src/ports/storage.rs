//! Storage port — the repository trait for quote persistence.

use std::future::Future;

use quotesvc_domain::error::QuoteError;
use quotesvc_domain::id::QuoteId;
use quotesvc_domain::quote::Quote;

/// Repository for persisting and querying [`Quote`]s.
///
/// Every method performs exactly one round trip to the data store.
pub trait QuoteRepository {
    /// Insert a new quote.
    ///
    /// Implementations must return [`QuoteError::AlreadyExists`] when a quote
    /// with the same identifier is already stored.
    fn create(&self, quote: Quote) -> impl Future<Output = Result<Quote, QuoteError>> + Send;

    /// Delete the quote with the given identifier.
    ///
    /// Deleting an absent identifier is a success (idempotent delete).
    fn delete_by_id(&self, id: QuoteId) -> impl Future<Output = Result<(), QuoteError>> + Send;

    /// List quotes, optionally restricted to an exact author match.
    ///
    /// `None` means no restriction. An empty result is an empty `Vec`,
    /// never an error.
    fn list_with_filter(
        &self,
        author: Option<String>,
    ) -> impl Future<Output = Result<Vec<Quote>, QuoteError>> + Send;

    /// Pick one stored quote uniformly at random.
    ///
    /// Implementations must return [`QuoteError::NoQuotes`] when the table is
    /// empty, since this operation promises exactly one result.
    fn get_random(&self) -> impl Future<Output = Result<Quote, QuoteError>> + Send;
}
