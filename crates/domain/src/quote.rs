//! Quote — an attributed quotation (author + text).

use serde::{Deserialize, Serialize};

use crate::error::{QuoteError, ValidationError};
use crate::id::QuoteId;

/// An attributed quotation.
///
/// Rows are never updated in place: a quote is created, read, and deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub author: String,
    pub quote: String,
}

impl Quote {
    /// Construct a quote with a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Validation`] when `author` or `quote` is empty.
    /// The checks are mutually exclusive: the first failing field wins.
    pub fn new(author: impl Into<String>, quote: impl Into<String>) -> Result<Self, QuoteError> {
        let quote = Self {
            id: QuoteId::new(),
            author: author.into(),
            quote: quote.into(),
        };
        quote.validate()?;
        Ok(quote)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Validation`] when `author` or `quote` is empty.
    pub fn validate(&self) -> Result<(), QuoteError> {
        if self.author.is_empty() {
            return Err(ValidationError::EmptyAuthor.into());
        }
        if self.quote.is_empty() {
            return Err(ValidationError::EmptyQuote.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_quote_when_both_fields_provided() {
        let quote = Quote::new("Seneca", "Luck is what happens when preparation meets opportunity.")
            .unwrap();
        assert_eq!(quote.author, "Seneca");
        assert!(!quote.quote.is_empty());
    }

    #[test]
    fn should_generate_fresh_id_for_each_quote() {
        let a = Quote::new("a", "x").unwrap();
        let b = Quote::new("a", "x").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn should_return_validation_error_when_author_is_empty() {
        let result = Quote::new("", "text");
        assert!(matches!(
            result,
            Err(QuoteError::Validation(ValidationError::EmptyAuthor))
        ));
    }

    #[test]
    fn should_return_validation_error_when_quote_is_empty() {
        let result = Quote::new("author", "");
        assert!(matches!(
            result,
            Err(QuoteError::Validation(ValidationError::EmptyQuote))
        ));
    }

    #[test]
    fn should_report_empty_author_before_empty_quote() {
        let result = Quote::new("", "");
        assert!(matches!(
            result,
            Err(QuoteError::Validation(ValidationError::EmptyAuthor))
        ));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let quote = Quote::new("Epictetus", "First say to yourself what you would be.").unwrap();
        let json = serde_json::to_string(&quote).unwrap();
        let parsed: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, quote.id);
        assert_eq!(parsed.author, quote.author);
        assert_eq!(parsed.quote, quote.quote);
    }
}
