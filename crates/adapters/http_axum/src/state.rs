//! Shared application state for axum handlers.

use std::sync::Arc;

use quotesvc_app::ports::QuoteRepository;
use quotesvc_app::services::quote_service::QuoteService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be `Clone`
/// — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Quote use-case service.
    pub quote_service: Arc<QuoteService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            quote_service: Arc::clone(&self.quote_service),
        }
    }
}

impl<R> AppState<R>
where
    R: QuoteRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(quote_service: QuoteService<R>) -> Self {
        Self {
            quote_service: Arc::new(quote_service),
        }
    }
}
