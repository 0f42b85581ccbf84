//! Text classification pipeline.
//!
//! [`TextPipeline`] bundles a fitted vectorizer and classifier as one
//! unit, so normalized text can be fed directly at prediction time
//! without re-invoking the vectorizer by hand.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::features::{TfIdfVectorizer, VectorizerConfig};
use crate::model::logistic::{ClassifierConfig, LogisticRegression};

/// Combined configuration for vectorizer and classifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Vectorizer settings.
    pub vectorizer: VectorizerConfig,
    /// Classifier settings.
    pub classifier: ClassifierConfig,
}

impl PipelineConfig {
    /// Validate both halves of the configuration.
    pub fn validate(&self) -> Result<()> {
        self.vectorizer.validate()?;
        self.classifier.validate()
    }
}

/// A fitted vectorizer + classifier pair.
#[derive(Debug, Clone)]
pub struct TextPipeline {
    vectorizer: TfIdfVectorizer,
    classifier: LogisticRegression,
}

impl TextPipeline {
    /// Fit vectorizer and classifier on normalized texts with parallel
    /// labels, and return the bundled pipeline.
    pub fn fit(config: PipelineConfig, texts: &[String], labels: &[String]) -> Result<Self> {
        let mut vectorizer = TfIdfVectorizer::new(config.vectorizer)?;
        vectorizer.fit(texts)?;

        let matrix = vectorizer.transform_corpus(texts);
        let mut classifier = LogisticRegression::new(config.classifier)?;
        classifier.fit(&matrix, labels)?;

        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Predict the author label for one normalized text.
    pub fn predict(&self, text: &str) -> Result<&str> {
        let features = self.vectorizer.transform(text);
        self.classifier.predict(&features)
    }

    /// Per-class probabilities for one normalized text, aligned with
    /// [`classes`](Self::classes).
    pub fn predict_proba(&self, text: &str) -> Result<Vec<f64>> {
        let features = self.vectorizer.transform(text);
        self.classifier.predict_proba(&features)
    }

    /// Mean accuracy over a labeled set of normalized texts.
    pub fn score(&self, texts: &[String], labels: &[String]) -> Result<f64> {
        if texts.is_empty() {
            return Ok(0.0);
        }

        let mut correct = 0;
        for (text, label) in texts.iter().zip(labels) {
            if self.predict(text)? == label {
                correct += 1;
            }
        }
        Ok(correct as f64 / texts.len() as f64)
    }

    /// The class labels in the ordering fixed at fit time.
    pub fn classes(&self) -> &[String] {
        self.classifier.classes()
    }

    /// Get the fitted vectorizer.
    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_end_to_end_prediction() {
        let texts = strings(&["vive la france", "je aime le pouvoir", "vive le peuple"]);
        let labels = strings(&["A", "B", "A"]);

        let pipeline = TextPipeline::fit(PipelineConfig::default(), &texts, &labels).unwrap();

        assert_eq!(pipeline.predict("vive la france").unwrap(), "A");

        let probabilities = pipeline.predict_proba("vive la france").unwrap();
        let a = probabilities[pipeline.classes().iter().position(|c| c == "A").unwrap()];
        let b = probabilities[pipeline.classes().iter().position(|c| c == "B").unwrap()];
        assert!(a > b);
    }

    #[test]
    fn test_unseen_terms_are_ignored() {
        let texts = strings(&["vive la france", "je aime le pouvoir"]);
        let labels = strings(&["A", "B"]);

        let pipeline = TextPipeline::fit(PipelineConfig::default(), &texts, &labels).unwrap();

        // Entirely unseen vocabulary still yields a prediction.
        assert!(pipeline.predict("mots totalement inconnus").is_ok());
    }

    #[test]
    fn test_score() {
        let texts = strings(&["vive la france", "je aime le pouvoir", "vive le peuple"]);
        let labels = strings(&["A", "B", "A"]);

        let pipeline = TextPipeline::fit(PipelineConfig::default(), &texts, &labels).unwrap();
        let accuracy = pipeline.score(&texts, &labels).unwrap();
        assert!(accuracy > 0.5);
    }
}
