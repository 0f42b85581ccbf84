//! Authorship model module for Tribune.
//!
//! Multi-class logistic regression over TF-IDF features, the text
//! pipeline bundling vectorizer and classifier, and the randomized
//! hyperparameter search with k-fold cross-validation.

pub mod logistic;
pub mod pipeline;
pub mod search;

pub use logistic::{ClassifierConfig, LogisticRegression, MulticlassStrategy, Penalty};
pub use pipeline::{PipelineConfig, TextPipeline};
pub use search::{ParameterGrid, RandomizedSearch, SearchConfig, SearchOutcome};
