//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`QuoteError`]
//! at the boundary; transports only ever see this enum.

/// Top-level error taxonomy for the quote service.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    /// A request field failed domain validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A quote with the same identifier is already stored.
    #[error("quote already exists")]
    AlreadyExists,

    /// A random pick was requested but the table holds no quotes.
    #[error("no quotes available")]
    NoQuotes,

    /// The persistence layer failed for any other reason.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Violations of quote invariants, checked before persistence is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The `author` field was empty.
    #[error("\"author\" field can not be empty")]
    EmptyAuthor,

    /// The `quote` field was empty.
    #[error("\"quote\" field can not be empty")]
    EmptyQuote,

    /// An identifier parameter was not a well-formed UUID.
    #[error("\"id\" parameter is not a valid UUID")]
    MalformedId,
}
