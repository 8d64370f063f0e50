//! Case-insensitive substring filtering over the quote collection.

use crate::error::{QuotesError, Result};
use crate::model::Quote;

/// Search criteria: any subset of {author, book title, quote body}.
/// Criteria are trimmed and case-folded at construction.
#[derive(Debug, Clone, Default)]
pub struct QuoteQuery {
    author: String,
    title: String,
    quote: String,
}

impl QuoteQuery {
    pub fn new(author: &str, title: &str, quote: &str) -> Self {
        Self {
            author: author.trim().to_lowercase(),
            title: title.trim().to_lowercase(),
            quote: quote.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.author.is_empty() && self.title.is_empty() && self.quote.is_empty()
    }

    /// A quote matches iff every provided criterion is a substring of the
    /// case-folded corresponding field. Authors are compared against the
    /// space-joined author list.
    pub fn matches(&self, quote: &Quote) -> bool {
        (self.author.is_empty()
            || quote.authors.join(" ").to_lowercase().contains(&self.author))
            && (self.title.is_empty() || quote.title.to_lowercase().contains(&self.title))
            && (self.quote.is_empty() || quote.quote.to_lowercase().contains(&self.quote))
    }

    /// Filter the collection, keeping original order.
    ///
    /// Fails with [`QuotesError::InvalidQuery`] when no criterion was
    /// provided; an empty match list is a normal outcome.
    pub fn filter<'a>(&self, quotes: &'a [Quote]) -> Result<Vec<&'a Quote>> {
        if self.is_empty() {
            return Err(QuotesError::InvalidQuery);
        }
        Ok(quotes.iter().filter(|q| self.matches(q)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(title: &str, authors: &[&str], body: &str) -> Quote {
        Quote {
            title: title.to_string(),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            location: "Location 1-2".to_string(),
            added_on: "2024-01-07 09:28:14".to_string(),
            quote: body.to_string(),
        }
    }

    fn collection() -> Vec<Quote> {
        vec![
            quote("John Wick", &["John Wick", "Baba Yaga"], "Est adipisci eius."),
            quote(
                "Lorem Ipsum (1st edition)",
                &["\u{160}pa\u{10d}ek, Karel"],
                "Consectetur neque adipisci.",
            ),
        ]
    }

    #[test]
    fn empty_query_is_invalid() {
        let err = QuoteQuery::new("", "  ", "").filter(&collection()).unwrap_err();
        assert!(matches!(err, QuotesError::InvalidQuery));
    }

    #[test]
    fn title_match_is_case_insensitive() {
        let quotes = collection();
        let matches = QuoteQuery::new("", "lorem IPSUM", "").filter(&quotes).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Lorem Ipsum (1st edition)");
    }

    #[test]
    fn author_matches_against_joined_list() {
        let quotes = collection();
        let matches = QuoteQuery::new("baba yaga", "", "").filter(&quotes).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "John Wick");
    }

    #[test]
    fn all_provided_criteria_must_match() {
        let quotes = collection();
        let matches = QuoteQuery::new("karel", "john wick", "")
            .filter(&quotes)
            .unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn body_substring_matches_both() {
        let quotes = collection();
        let matches = QuoteQuery::new("", "", "adipisci").filter(&quotes).unwrap();
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn criteria_are_trimmed() {
        let quotes = collection();
        let matches = QuoteQuery::new("  Baba Yaga  ", "", "").filter(&quotes).unwrap();
        assert_eq!(matches.len(), 1);
    }
}
