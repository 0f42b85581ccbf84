//! Multi-class logistic regression.
//!
//! Batch gradient descent from zero-initialized weights, so fitting is
//! deterministic for a given input. The one-vs-rest strategy trains one
//! binary sigmoid model per class; the multinomial strategy trains a
//! single softmax model. Class ordering is captured at fit time
//! (lexicographic) and exposed as model metadata; evaluation code reads
//! it from here instead of re-deriving it.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TribuneError};

/// Regularization penalty type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Penalty {
    /// L2 (ridge) penalty.
    L2,
}

/// Multi-class decomposition strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MulticlassStrategy {
    /// One binary classifier per class against all others.
    OneVsRest,
    /// A single softmax model over all classes.
    Multinomial,
}

/// Configuration for the logistic regression classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Inverse regularization strength. Larger values mean weaker
    /// regularization. Must be positive.
    pub c: f64,
    /// Penalty type.
    pub penalty: Penalty,
    /// Multi-class strategy.
    pub strategy: MulticlassStrategy,
    /// Gradient descent step size.
    pub learning_rate: f64,
    /// Maximum number of gradient descent iterations.
    pub max_iter: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            c: 1.0,
            penalty: Penalty::L2,
            strategy: MulticlassStrategy::OneVsRest,
            learning_rate: 0.5,
            max_iter: 200,
        }
    }
}

impl ClassifierConfig {
    /// Validate the configuration, rejecting out-of-domain values.
    pub fn validate(&self) -> Result<()> {
        if self.c <= 0.0 {
            return Err(TribuneError::config(format!(
                "regularization strength c must be positive, got {}",
                self.c
            )));
        }
        if self.learning_rate <= 0.0 {
            return Err(TribuneError::config("learning_rate must be positive"));
        }
        if self.max_iter == 0 {
            return Err(TribuneError::config("max_iter must be at least 1"));
        }
        Ok(())
    }
}

/// A multi-class logistic regression classifier.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    config: ClassifierConfig,
    /// Class labels in the ordering fixed at fit time.
    classes: Vec<String>,
    /// One weight vector per class.
    weights: Vec<Vec<f64>>,
    /// One intercept per class.
    intercepts: Vec<f64>,
}

impl LogisticRegression {
    /// Create a new unfitted classifier with a validated configuration.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            classes: Vec::new(),
            weights: Vec::new(),
            intercepts: Vec::new(),
        })
    }

    /// Get the configuration of this classifier.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// The class labels in the ordering fixed at fit time.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Check if the classifier has been fitted.
    pub fn is_fitted(&self) -> bool {
        !self.classes.is_empty()
    }

    /// Fit the classifier on a feature matrix and parallel labels.
    ///
    /// Fails on degenerate training data: fewer than 2 distinct classes,
    /// zero feature columns, or mismatched lengths.
    pub fn fit(&mut self, x: &[Vec<f64>], y: &[String]) -> Result<()> {
        if x.len() != y.len() {
            return Err(TribuneError::training(format!(
                "feature matrix has {} rows but {} labels",
                x.len(),
                y.len()
            )));
        }
        if x.is_empty() {
            return Err(TribuneError::training("empty training set"));
        }

        let n_features = x[0].len();
        if n_features == 0 {
            return Err(TribuneError::training(
                "feature matrix has zero columns (empty vocabulary)",
            ));
        }

        let mut classes: Vec<String> = y.to_vec();
        classes.sort_unstable();
        classes.dedup();
        if classes.len() < 2 {
            return Err(TribuneError::training(format!(
                "training data contains {} distinct class(es), need at least 2",
                classes.len()
            )));
        }

        self.classes = classes;
        match self.config.strategy {
            MulticlassStrategy::OneVsRest => self.fit_one_vs_rest(x, y, n_features),
            MulticlassStrategy::Multinomial => self.fit_multinomial(x, y, n_features),
        }

        Ok(())
    }

    /// Per-class probabilities for one feature vector, aligned with
    /// [`classes`](Self::classes).
    pub fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>> {
        if !self.is_fitted() {
            return Err(TribuneError::training("classifier is not fitted"));
        }
        if features.len() != self.weights[0].len() {
            return Err(TribuneError::training(format!(
                "expected {} features, got {}",
                self.weights[0].len(),
                features.len()
            )));
        }

        let scores: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.intercepts)
            .map(|(w, b)| dot(w, features) + b)
            .collect();

        let probabilities = match self.config.strategy {
            MulticlassStrategy::OneVsRest => {
                // Independent sigmoid scores rescaled to sum to one.
                let raw: Vec<f64> = scores.iter().map(|s| sigmoid(*s)).collect();
                let total: f64 = raw.iter().sum();
                if total > 0.0 {
                    raw.iter().map(|p| p / total).collect()
                } else {
                    vec![1.0 / raw.len() as f64; raw.len()]
                }
            }
            MulticlassStrategy::Multinomial => softmax(&scores),
        };

        Ok(probabilities)
    }

    /// Predict the most probable class label.
    pub fn predict(&self, features: &[f64]) -> Result<&str> {
        let probabilities = self.predict_proba(features)?;
        let best = probabilities
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(idx, _)| idx)
            .unwrap_or(0);

        Ok(&self.classes[best])
    }

    fn fit_one_vs_rest(&mut self, x: &[Vec<f64>], y: &[String], n_features: usize) {
        let n = x.len() as f64;
        let lambda = 1.0 / (self.config.c * n);

        self.weights = Vec::with_capacity(self.classes.len());
        self.intercepts = Vec::with_capacity(self.classes.len());

        for class in &self.classes {
            let targets: Vec<f64> = y.iter().map(|l| if l == class { 1.0 } else { 0.0 }).collect();

            let mut w = vec![0.0; n_features];
            let mut b = 0.0;

            for _ in 0..self.config.max_iter {
                let mut grad_w = vec![0.0; n_features];
                let mut grad_b = 0.0;

                for (row, target) in x.iter().zip(&targets) {
                    let error = sigmoid(dot(&w, row) + b) - target;
                    for (g, value) in grad_w.iter_mut().zip(row) {
                        *g += error * value;
                    }
                    grad_b += error;
                }

                for (wi, g) in w.iter_mut().zip(&grad_w) {
                    *wi -= self.config.learning_rate * (g / n + lambda * *wi);
                }
                b -= self.config.learning_rate * grad_b / n;
            }

            self.weights.push(w);
            self.intercepts.push(b);
        }
    }

    fn fit_multinomial(&mut self, x: &[Vec<f64>], y: &[String], n_features: usize) {
        let n = x.len() as f64;
        let k = self.classes.len();
        let lambda = 1.0 / (self.config.c * n);

        let class_index: Vec<usize> = y
            .iter()
            .map(|label| self.classes.iter().position(|c| c == label).unwrap_or(0))
            .collect();

        let mut weights = vec![vec![0.0; n_features]; k];
        let mut intercepts = vec![0.0; k];

        for _ in 0..self.config.max_iter {
            let mut grad_w = vec![vec![0.0; n_features]; k];
            let mut grad_b = vec![0.0; k];

            for (row, &true_class) in x.iter().zip(&class_index) {
                let scores: Vec<f64> = weights
                    .iter()
                    .zip(&intercepts)
                    .map(|(w, b)| dot(w, row) + b)
                    .collect();
                let probabilities = softmax(&scores);

                for (class, p) in probabilities.iter().enumerate() {
                    let error = p - if class == true_class { 1.0 } else { 0.0 };
                    for (g, value) in grad_w[class].iter_mut().zip(row) {
                        *g += error * value;
                    }
                    grad_b[class] += error;
                }
            }

            for (class, w) in weights.iter_mut().enumerate() {
                for (wi, g) in w.iter_mut().zip(&grad_w[class]) {
                    *wi -= self.config.learning_rate * (g / n + lambda * *wi);
                }
                intercepts[class] -= self.config.learning_rate * grad_b[class] / n;
            }
        }

        self.weights = weights;
        self.intercepts = intercepts;
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.iter().map(|e| e / total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xor_free_data() -> (Vec<Vec<f64>>, Vec<String>) {
        // Two linearly separable clusters.
        let x = vec![
            vec![1.0, 0.0],
            vec![0.9, 0.1],
            vec![0.8, 0.0],
            vec![0.0, 1.0],
            vec![0.1, 0.9],
            vec![0.0, 0.8],
        ];
        let y = vec!["gauche", "gauche", "gauche", "droite", "droite", "droite"]
            .into_iter()
            .map(String::from)
            .collect();
        (x, y)
    }

    #[test]
    fn test_classes_sorted_at_fit() {
        let (x, y) = xor_free_data();
        let mut model = LogisticRegression::new(ClassifierConfig::default()).unwrap();
        model.fit(&x, &y).unwrap();

        assert_eq!(model.classes(), ["droite", "gauche"]);
    }

    #[test]
    fn test_one_vs_rest_separates_clusters() {
        let (x, y) = xor_free_data();
        let mut model = LogisticRegression::new(ClassifierConfig::default()).unwrap();
        model.fit(&x, &y).unwrap();

        assert_eq!(model.predict(&[1.0, 0.0]).unwrap(), "gauche");
        assert_eq!(model.predict(&[0.0, 1.0]).unwrap(), "droite");
    }

    #[test]
    fn test_multinomial_separates_clusters() {
        let (x, y) = xor_free_data();
        let config = ClassifierConfig {
            strategy: MulticlassStrategy::Multinomial,
            ..ClassifierConfig::default()
        };
        let mut model = LogisticRegression::new(config).unwrap();
        model.fit(&x, &y).unwrap();

        assert_eq!(model.predict(&[0.9, 0.0]).unwrap(), "gauche");
        assert_eq!(model.predict(&[0.0, 0.9]).unwrap(), "droite");
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let (x, y) = xor_free_data();
        let mut model = LogisticRegression::new(ClassifierConfig::default()).unwrap();
        model.fit(&x, &y).unwrap();

        let probabilities = model.predict_proba(&[0.5, 0.5]).unwrap();
        let total: f64 = probabilities.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_class_is_error() {
        let x = vec![vec![1.0], vec![2.0]];
        let y = vec!["seul".to_string(), "seul".to_string()];
        let mut model = LogisticRegression::new(ClassifierConfig::default()).unwrap();

        let err = model.fit(&x, &y).unwrap_err();
        assert!(err.to_string().contains("distinct class"));
    }

    #[test]
    fn test_zero_columns_is_error() {
        let x = vec![vec![], vec![]];
        let y = vec!["a".to_string(), "b".to_string()];
        let mut model = LogisticRegression::new(ClassifierConfig::default()).unwrap();

        let err = model.fit(&x, &y).unwrap_err();
        assert!(err.to_string().contains("zero columns"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(
            LogisticRegression::new(ClassifierConfig {
                c: 0.0,
                ..ClassifierConfig::default()
            })
            .is_err()
        );

        assert!(
            LogisticRegression::new(ClassifierConfig {
                max_iter: 0,
                ..ClassifierConfig::default()
            })
            .is_err()
        );
    }

    #[test]
    fn test_unfitted_prediction_is_error() {
        let model = LogisticRegression::new(ClassifierConfig::default()).unwrap();
        assert!(model.predict(&[1.0]).is_err());
    }

    #[test]
    fn test_fit_is_deterministic() {
        let (x, y) = xor_free_data();

        let mut a = LogisticRegression::new(ClassifierConfig::default()).unwrap();
        a.fit(&x, &y).unwrap();
        let mut b = LogisticRegression::new(ClassifierConfig::default()).unwrap();
        b.fit(&x, &y).unwrap();

        assert_eq!(
            a.predict_proba(&[0.3, 0.7]).unwrap(),
            b.predict_proba(&[0.3, 0.7]).unwrap()
        );
    }
}
