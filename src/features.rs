//! Feature extraction module for Tribune.
//!
//! Turns normalized text into fixed-width numeric vectors with TF-IDF
//! weighting over token n-grams.

pub mod vectorizer;

pub use vectorizer::{TfIdfVectorizer, VectorizerConfig};
