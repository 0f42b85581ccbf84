//! Text analysis module for Tribune.
//!
//! This module provides the French tweet normalization pipeline: character
//! level scrubbing, tokenization, stopword/punctuation filtering, and
//! lemmatization. The [`normalizer::TweetNormalizer`] facade composes the
//! pieces in the order the pipeline requires.

pub mod char_filter;
pub mod lemma;
pub mod normalizer;
pub mod stopwords;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use normalizer::{NormalizerConfig, TweetNormalizer};
pub use token::{Token, TokenKind, TokenStream};
