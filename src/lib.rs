//! # Tribune
//!
//! Text analytics and authorship attribution for French political tweets.
//!
//! ## Features
//!
//! - CSV corpus ingestion with fail-fast schema checking
//! - French text normalization pipeline (regex scrubbing, tokenization,
//!   stopword filtering, lemmatization)
//! - TF-IDF feature extraction with n-grams and document-frequency filters
//! - Multi-class logistic regression (one-vs-rest and multinomial)
//! - Randomized hyperparameter search with k-fold cross-validation
//! - Evaluation reports: accuracy, confusion matrix, per-class metrics
//! - Word-frequency and comparative-vocabulary report artifacts

pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod evaluation;
pub mod features;
pub mod model;
pub mod report;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
