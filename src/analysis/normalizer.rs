//! Tweet normalization facade.
//!
//! [`TweetNormalizer`] composes the full cleaning pipeline: lowercasing,
//! character scrubbing (links, then tags, then numbers), tokenization, and
//! token filtering (whitespace, punctuation, stopwords, lemma annotation).
//!
//! Normalized text is a pure function of the raw text and the
//! configuration. Construction compiles the scrub patterns and is the only
//! fallible step; normalization itself never fails on text content, and
//! empty input yields empty output.
//!
//! # Examples
//!
//! ```
//! use tribune::analysis::normalizer::{NormalizerConfig, TweetNormalizer};
//!
//! let normalizer = TweetNormalizer::new(NormalizerConfig::default()).unwrap();
//! let normalized = normalizer
//!     .normalize("Demain 20h30, #EnMarche vers https://example.com la victoire !")
//!     .unwrap();
//!
//! assert!(!normalized.contains("http"));
//! assert!(!normalized.contains('#'));
//! assert!(!normalized.chars().any(|c| c.is_ascii_digit()));
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::{CharFilter, PatternStripFilter};
use crate::analysis::token::Token;
use crate::analysis::token_filter::{
    LemmaFilter, PunctuationFilter, StopFilter, TokenFilter, WhitespaceFilter,
};
use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
use crate::error::Result;

/// Configuration of the normalization pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Emit lemmas instead of surface forms.
    pub lemmatize: bool,
    /// Domain stopwords added to the built-in French list.
    pub extra_stopwords: HashSet<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            lemmatize: true,
            extra_stopwords: HashSet::new(),
        }
    }
}

/// The tweet normalization pipeline.
pub struct TweetNormalizer {
    config: NormalizerConfig,
    char_filters: Vec<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
    token_filters: Vec<Arc<dyn TokenFilter>>,
}

impl TweetNormalizer {
    /// Build the pipeline for the given configuration.
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        // Scrub order is load-bearing: links, then tags, then numbers.
        let char_filters: Vec<Arc<dyn CharFilter>> = vec![
            Arc::new(PatternStripFilter::links()?),
            Arc::new(PatternStripFilter::tags()?),
            Arc::new(PatternStripFilter::numbers()?),
        ];

        let token_filters: Vec<Arc<dyn TokenFilter>> = vec![
            Arc::new(WhitespaceFilter::new()),
            Arc::new(PunctuationFilter::new()),
            Arc::new(StopFilter::french_with_extra(&config.extra_stopwords)),
            Arc::new(LemmaFilter::new()),
        ];

        Ok(Self {
            config,
            char_filters,
            tokenizer: Arc::new(UnicodeWordTokenizer::new()),
            token_filters,
        })
    }

    /// Get the configuration of this normalizer.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize raw tweet text into a cleaned, space-joined string.
    pub fn normalize(&self, text: &str) -> Result<String> {
        let tokens = self.tokens(text)?;
        let words: Vec<&str> = tokens
            .iter()
            .map(|token| {
                if self.config.lemmatize {
                    token.lemma_or_text()
                } else {
                    token.text.as_str()
                }
            })
            .collect();

        Ok(words.join(" "))
    }

    /// Run the pipeline and return the surviving tokens.
    pub fn tokens(&self, text: &str) -> Result<Vec<Token>> {
        let mut scrubbed = text.to_lowercase();
        for filter in &self.char_filters {
            scrubbed = filter.filter(&scrubbed);
        }

        let mut stream = self.tokenizer.tokenize(&scrubbed)?;
        for filter in &self.token_filters {
            stream = filter.filter(stream)?;
        }

        Ok(stream.collect())
    }
}
