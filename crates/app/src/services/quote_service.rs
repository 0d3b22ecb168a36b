//! Quote service — use-cases for managing quotes.

use quotesvc_domain::error::QuoteError;
use quotesvc_domain::id::QuoteId;
use quotesvc_domain::quote::Quote;

use crate::ports::QuoteRepository;

/// Application service for quote operations.
///
/// The sole entry point used by transport layers. Owns identifier generation
/// and error translation; there are no further business rules.
pub struct QuoteService<R> {
    repo: R,
}

impl<R: QuoteRepository> QuoteService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new quote with a freshly generated identifier.
    ///
    /// Validation happens before the repository is reached: an empty author
    /// or quote never touches persistence.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Validation`] if either field is empty,
    /// [`QuoteError::AlreadyExists`] on an identifier collision, or a
    /// storage error propagated from the repository.
    pub async fn create_new_quote(
        &self,
        author: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Quote, QuoteError> {
        let quote = Quote::new(author, text)?;
        self.repo.create(quote).await
    }

    /// Delete a quote by id. Deleting an absent id is a success.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_by_id(&self, id: QuoteId) -> Result<(), QuoteError> {
        self.repo.delete_by_id(id).await
    }

    /// List quotes, optionally restricted to an exact author match.
    ///
    /// An empty filter string is treated as no restriction.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_quotes_with_filter(
        &self,
        author: Option<String>,
    ) -> Result<Vec<Quote>, QuoteError> {
        let author = author.filter(|a| !a.is_empty());
        self.repo.list_with_filter(author).await
    }

    /// Pick one stored quote uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::NoQuotes`] when nothing is stored, or a storage
    /// error propagated from the repository.
    pub async fn get_random_quote(&self) -> Result<Quote, QuoteError> {
        self.repo.get_random().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotesvc_domain::error::ValidationError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    struct InMemoryQuoteRepo {
        store: Mutex<HashMap<QuoteId, Quote>>,
    }

    impl Default for InMemoryQuoteRepo {
        fn default() -> Self {
            Self {
                store: Mutex::new(HashMap::new()),
            }
        }
    }

    impl InMemoryQuoteRepo {
        fn len(&self) -> usize {
            self.store.lock().unwrap().len()
        }
    }

    impl QuoteRepository for InMemoryQuoteRepo {
        fn create(&self, quote: Quote) -> impl Future<Output = Result<Quote, QuoteError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = if store.contains_key(&quote.id) {
                Err(QuoteError::AlreadyExists)
            } else {
                store.insert(quote.id, quote.clone());
                Ok(quote)
            };
            async { result }
        }

        fn delete_by_id(
            &self,
            id: QuoteId,
        ) -> impl Future<Output = Result<(), QuoteError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.remove(&id);
            async { Ok(()) }
        }

        fn list_with_filter(
            &self,
            author: Option<String>,
        ) -> impl Future<Output = Result<Vec<Quote>, QuoteError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Quote> = store
                .values()
                .filter(|q| author.as_deref().is_none_or(|a| q.author == a))
                .cloned()
                .collect();
            async { Ok(result) }
        }

        fn get_random(&self) -> impl Future<Output = Result<Quote, QuoteError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.values().next().cloned().ok_or(QuoteError::NoQuotes);
            async { result }
        }
    }

    fn make_service() -> QuoteService<InMemoryQuoteRepo> {
        QuoteService::new(InMemoryQuoteRepo::default())
    }

    #[tokio::test]
    async fn should_create_quote_when_both_fields_valid() {
        let svc = make_service();

        let created = svc.create_new_quote("author-1", "quote-1").await.unwrap();
        assert_eq!(created.author, "author-1");
        assert_eq!(created.quote, "quote-1");

        let all = svc.get_quotes_with_filter(None).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);
    }

    #[tokio::test]
    async fn should_generate_unique_ids_across_creates() {
        let svc = make_service();
        let a = svc.create_new_quote("author", "text").await.unwrap();
        let b = svc.create_new_quote("author", "text").await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn should_reject_empty_author_before_persistence() {
        let svc = make_service();
        let result = svc.create_new_quote("", "quote-1").await;
        assert!(matches!(
            result,
            Err(QuoteError::Validation(ValidationError::EmptyAuthor))
        ));
        assert_eq!(svc.repo.len(), 0);
    }

    #[tokio::test]
    async fn should_reject_empty_quote_before_persistence() {
        let svc = make_service();
        let result = svc.create_new_quote("author-1", "").await;
        assert!(matches!(
            result,
            Err(QuoteError::Validation(ValidationError::EmptyQuote))
        ));
        assert_eq!(svc.repo.len(), 0);
    }

    #[tokio::test]
    async fn should_pass_through_already_exists_from_repository() {
        let svc = make_service();
        let created = svc.create_new_quote("author", "text").await.unwrap();

        // Force a collision by inserting the same quote again.
        let result = svc.repo.create(created).await;
        assert!(matches!(result, Err(QuoteError::AlreadyExists)));
    }

    #[tokio::test]
    async fn should_delete_idempotently_when_id_absent() {
        let svc = make_service();
        svc.delete_by_id(QuoteId::new()).await.unwrap();
    }

    #[tokio::test]
    async fn should_delete_existing_quote() {
        let svc = make_service();
        let created = svc.create_new_quote("author", "text").await.unwrap();

        svc.delete_by_id(created.id).await.unwrap();

        let all = svc.get_quotes_with_filter(None).await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn should_filter_by_exact_author_match() {
        let svc = make_service();
        svc.create_new_quote("author-1", "quote-1").await.unwrap();
        svc.create_new_quote("author-2", "quote-2").await.unwrap();

        let filtered = svc
            .get_quotes_with_filter(Some("author-1".to_string()))
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].author, "author-1");
    }

    #[tokio::test]
    async fn should_return_empty_list_when_filter_matches_nothing() {
        let svc = make_service();
        svc.create_new_quote("author-1", "quote-1").await.unwrap();

        let filtered = svc
            .get_quotes_with_filter(Some("nobody".to_string()))
            .await
            .unwrap();
        assert!(filtered.is_empty());
    }

    #[tokio::test]
    async fn should_treat_empty_filter_as_no_restriction() {
        let svc = make_service();
        svc.create_new_quote("author-1", "quote-1").await.unwrap();
        svc.create_new_quote("author-2", "quote-2").await.unwrap();

        let all = svc
            .get_quotes_with_filter(Some(String::new()))
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_return_no_quotes_error_when_picking_from_empty_store() {
        let svc = make_service();
        let result = svc.get_random_quote().await;
        assert!(matches!(result, Err(QuoteError::NoQuotes)));
    }

    #[tokio::test]
    async fn should_return_stored_quote_on_random_pick() {
        let svc = make_service();
        let created = svc.create_new_quote("author", "text").await.unwrap();

        let picked = svc.get_random_quote().await.unwrap();
        assert_eq!(picked.id, created.id);
    }
}
