//! TF-IDF vectorizer for text feature extraction.
//!
//! The vectorizer learns a vocabulary of token n-grams from a training
//! corpus, prunes terms by document frequency, and maps any document to a
//! fixed-width vector with smooth log-scaled IDF weighting. The vocabulary
//! is frozen after fitting: terms unseen during training contribute zero
//! at transform time, never an error.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TribuneError};

/// Configuration for the TF-IDF vectorizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Terms present in more than this fraction of training documents are
    /// dropped as near-stopwords. Must lie in (0, 1].
    pub max_df: f64,
    /// Terms present in fewer than this many training documents are
    /// dropped as noise. Must be at least 1.
    pub min_df: usize,
    /// Inclusive range of n-gram sizes to index, e.g. `(1, 2)` for
    /// unigrams and bigrams. Both bounds must be at least 1.
    pub ngram_range: (usize, usize),
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            max_df: 1.0,
            min_df: 1,
            ngram_range: (1, 1),
        }
    }
}

impl VectorizerConfig {
    /// Validate the configuration, rejecting out-of-domain values.
    pub fn validate(&self) -> Result<()> {
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(TribuneError::config(format!(
                "max_df must be in (0, 1], got {}",
                self.max_df
            )));
        }
        if self.min_df < 1 {
            return Err(TribuneError::config("min_df must be at least 1"));
        }
        let (lo, hi) = self.ngram_range;
        if lo < 1 || hi < lo {
            return Err(TribuneError::config(format!(
                "ngram_range must satisfy 1 <= min <= max, got ({lo}, {hi})"
            )));
        }
        Ok(())
    }
}

/// TF-IDF vectorizer with a frozen vocabulary.
///
/// # Examples
///
/// ```
/// use tribune::features::{TfIdfVectorizer, VectorizerConfig};
///
/// let corpus = vec![
///     "vive la france".to_string(),
///     "vive le peuple".to_string(),
/// ];
///
/// let mut vectorizer = TfIdfVectorizer::new(VectorizerConfig::default()).unwrap();
/// vectorizer.fit(&corpus).unwrap();
///
/// let vector = vectorizer.transform("vive la suède");
/// assert_eq!(vector.len(), vectorizer.vocabulary_size());
/// ```
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    config: VectorizerConfig,
    /// Term -> column index, frozen after fitting.
    vocabulary: AHashMap<String, usize>,
    /// Inverse document frequency per column.
    idf: Vec<f64>,
    /// Number of training documents.
    n_documents: usize,
}

impl TfIdfVectorizer {
    /// Create a new vectorizer with a validated configuration.
    pub fn new(config: VectorizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            vocabulary: AHashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
        })
    }

    /// Get the configuration of this vectorizer.
    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    /// Fit the vocabulary and IDF weights on a training corpus.
    ///
    /// Fails if the document-frequency filters leave an empty vocabulary,
    /// a configuration problem rather than a recoverable condition.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        self.n_documents = documents.len();

        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();
        for doc in documents {
            let terms = self.extract_terms(doc);
            let mut seen: Vec<&String> = terms.iter().collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *document_frequency.entry(term.clone()).or_insert(0) += 1;
            }
        }

        let max_count = (self.config.max_df * self.n_documents as f64).floor() as usize;
        let mut retained: Vec<(String, usize)> = document_frequency
            .into_iter()
            .filter(|(_, df)| *df >= self.config.min_df && *df <= max_count)
            .collect();

        // Sorted vocabulary keeps column order deterministic across runs.
        retained.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        if retained.is_empty() {
            return Err(TribuneError::training(format!(
                "empty vocabulary after document-frequency filtering \
                 (min_df={}, max_df={}, {} documents)",
                self.config.min_df, self.config.max_df, self.n_documents
            )));
        }

        let mut vocabulary = AHashMap::with_capacity(retained.len());
        let mut idf = Vec::with_capacity(retained.len());
        for (idx, (term, df)) in retained.into_iter().enumerate() {
            // Smooth IDF: ln((1 + N) / (1 + df)) + 1
            idf.push(((1.0 + self.n_documents as f64) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;

        Ok(())
    }

    /// Transform a document into a TF-IDF vector over the frozen
    /// vocabulary. Out-of-vocabulary terms are silently dropped.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let terms = self.extract_terms(document);
        let mut vector = vec![0.0; self.vocabulary.len()];

        for term in &terms {
            if let Some(&idx) = self.vocabulary.get(term) {
                vector[idx] += 1.0;
            }
        }

        if !terms.is_empty() {
            let length = terms.len() as f64;
            for value in &mut vector {
                *value /= length;
            }
        }

        for (idx, value) in vector.iter_mut().enumerate() {
            *value *= self.idf[idx];
        }

        // Unit length keeps documents of different sizes comparable.
        let norm: f64 = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        vector
    }

    /// Transform a whole corpus.
    pub fn transform_corpus(&self, documents: &[String]) -> Vec<Vec<f64>> {
        documents.iter().map(|doc| self.transform(doc)).collect()
    }

    /// Get the size of the frozen vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Extract the n-gram terms of a document.
    fn extract_terms(&self, document: &str) -> Vec<String> {
        let tokens: Vec<&str> = document.split_whitespace().collect();
        let (lo, hi) = self.config.ngram_range;

        let mut terms = Vec::new();
        for n in lo..=hi {
            if n > tokens.len() {
                break;
            }
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }
        terms
    }
}
