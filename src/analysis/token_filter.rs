//! Token filters applied after tokenization.
//!
//! Filters mirror the attributes the pipeline filters on: stopwords,
//! punctuation, whitespace-only segments, and the lemma annotation.

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::lemma::FrenchLemmatizer;
use crate::analysis::stopwords::french_stop_words;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Trait for filters that transform a token stream.
pub trait TokenFilter: Send + Sync {
    /// Filter the given token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A filter that removes stopwords from the token stream.
///
/// The stop set is fixed at construction and never mutated afterwards, so
/// two normalizers with the same configuration always agree.
///
/// # Examples
///
/// ```
/// use tribune::analysis::token::Token;
/// use tribune::analysis::token_filter::{StopFilter, TokenFilter};
///
/// let filter = StopFilter::french();
/// let tokens = vec![Token::new("le", 0), Token::new("peuple", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "peuple");
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter with the default French stopword list.
    pub fn french() -> Self {
        Self::with_stop_words(french_stop_words().clone())
    }

    /// Create a stop filter with the default French list plus extra words.
    pub fn french_with_extra(extra: &HashSet<String>) -> Self {
        let mut words = french_stop_words().clone();
        words.extend(extra.iter().cloned());
        Self::with_stop_words(words)
    }

    /// Create a stop filter with a custom stopword set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Check if a word is a stopword.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stopwords.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stopword set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl TokenFilter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

/// A filter that removes punctuation tokens.
#[derive(Clone, Debug, Default)]
pub struct PunctuationFilter;

impl PunctuationFilter {
    /// Create a new punctuation filter.
    pub fn new() -> Self {
        PunctuationFilter
    }
}

impl TokenFilter for PunctuationFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<Token> = tokens.filter(|token| !token.is_punctuation()).collect();
        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}

/// A filter that removes whitespace-only tokens.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceFilter;

impl WhitespaceFilter {
    /// Create a new whitespace filter.
    pub fn new() -> Self {
        WhitespaceFilter
    }
}

impl TokenFilter for WhitespaceFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<Token> = tokens.filter(|token| !token.is_whitespace()).collect();
        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

/// A filter that attaches each token's lemma.
///
/// The surface form stays on the token; callers choose which to emit.
#[derive(Clone, Debug, Default)]
pub struct LemmaFilter {
    lemmatizer: FrenchLemmatizer,
}

impl LemmaFilter {
    /// Create a new lemma filter.
    pub fn new() -> Self {
        LemmaFilter {
            lemmatizer: FrenchLemmatizer::new(),
        }
    }
}

impl TokenFilter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let lemmatizer = self.lemmatizer.clone();
        let annotated: Vec<Token> = tokens
            .map(|token| {
                let lemma = lemmatizer.lemmatize(&token.text);
                token.with_lemma(lemma)
            })
            .collect();

        Ok(Box::new(annotated.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}
