//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod quotes;

use axum::Router;
use axum::routing::{delete, get};

use quotesvc_app::ports::QuoteRepository;

use crate::state::AppState;

/// Build the `/quotes` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: QuoteRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/quotes", get(quotes::list::<R>).post(quotes::create::<R>))
        .route("/quotes/random", get(quotes::random::<R>))
        .route("/quotes/{id}", delete(quotes::delete::<R>))
}
