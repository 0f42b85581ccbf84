//! Reporting module for Tribune.
//!
//! Write-only artifacts over normalized text: word-frequency
//! distributions, word-cloud term weights, and the comparative-vocabulary
//! scatter document. Nothing here feeds back into the core pipeline.

pub mod frequency;
pub mod vocabulary;
pub mod wordcloud;

pub use frequency::FrequencyDistribution;
pub use vocabulary::{VocabularyComparison, VocabularyComparisonConfig};
pub use wordcloud::WordCloudArtifact;
