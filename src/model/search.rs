//! Randomized hyperparameter search with k-fold cross-validation.
//!
//! Candidates are sampled from a discrete parameter grid with a seeded
//! generator, scored by mean validation accuracy over k folds, and fitted
//! independently in parallel. A candidate whose fit degenerates (a fold
//! with fewer than two classes, an empty vocabulary) is discarded; the
//! search continues with the rest. Ties break toward the
//! earliest-sampled candidate.

use log::{debug, info, warn};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TribuneError};
use crate::model::logistic::{MulticlassStrategy, Penalty};
use crate::model::pipeline::{PipelineConfig, TextPipeline};

/// Discrete values to sample from, one list per searched parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterGrid {
    /// Document-frequency ceilings for the vectorizer.
    pub max_df: Vec<f64>,
    /// Document-frequency floors for the vectorizer.
    pub min_df: Vec<usize>,
    /// Inverse regularization strengths.
    pub c: Vec<f64>,
    /// Penalty types.
    pub penalty: Vec<Penalty>,
    /// Multi-class strategies.
    pub strategy: Vec<MulticlassStrategy>,
}

impl Default for ParameterGrid {
    fn default() -> Self {
        Self {
            max_df: vec![0.99, 0.95, 0.9],
            min_df: vec![2, 5, 10],
            c: vec![1.0, 20.0, 50.0],
            penalty: vec![Penalty::L2],
            strategy: vec![MulticlassStrategy::OneVsRest, MulticlassStrategy::Multinomial],
        }
    }
}

impl ParameterGrid {
    fn validate(&self) -> Result<()> {
        if self.max_df.is_empty()
            || self.min_df.is_empty()
            || self.c.is_empty()
            || self.penalty.is_empty()
            || self.strategy.is_empty()
        {
            return Err(TribuneError::config(
                "every parameter grid dimension needs at least one value",
            ));
        }
        Ok(())
    }
}

/// Search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of random parameter draws.
    pub n_iter: usize,
    /// Number of cross-validation folds. Must be at least 2.
    pub cv_folds: usize,
    /// Seed for candidate sampling and fold shuffling.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            n_iter: 20,
            cv_folds: 5,
            seed: 5439676,
        }
    }
}

impl SearchConfig {
    fn validate(&self) -> Result<()> {
        if self.n_iter < 1 {
            return Err(TribuneError::config("n_iter must be at least 1"));
        }
        if self.cv_folds < 2 {
            return Err(TribuneError::config("cv_folds must be at least 2"));
        }
        Ok(())
    }
}

/// One evaluated candidate, in sampling order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateResult {
    /// The sampled configuration.
    pub config: PipelineConfig,
    /// Mean validation accuracy, or `None` when the candidate was
    /// discarded as degenerate.
    pub mean_accuracy: Option<f64>,
}

/// The result of a randomized search.
#[derive(Debug)]
pub struct SearchOutcome {
    /// The winning pipeline, refitted on the full training data.
    pub best: TextPipeline,
    /// Configuration of the winner.
    pub best_config: PipelineConfig,
    /// Mean validation accuracy of the winner.
    pub best_accuracy: f64,
    /// All candidates in sampling order.
    pub candidates: Vec<CandidateResult>,
}

/// Randomized hyperparameter search over a [`ParameterGrid`].
#[derive(Debug, Clone, Default)]
pub struct RandomizedSearch {
    grid: ParameterGrid,
    config: SearchConfig,
    /// Non-searched parameters (n-gram range, learning rate, ...).
    base: PipelineConfig,
}

impl RandomizedSearch {
    /// Create a new search.
    pub fn new(grid: ParameterGrid, config: SearchConfig, base: PipelineConfig) -> Self {
        Self { grid, config, base }
    }

    /// Run the search on normalized training texts with parallel labels.
    pub fn run(&self, texts: &[String], labels: &[String]) -> Result<SearchOutcome> {
        self.grid.validate()?;
        self.config.validate()?;
        self.base.validate()?;

        if texts.len() != labels.len() {
            return Err(TribuneError::training(format!(
                "{} texts but {} labels",
                texts.len(),
                labels.len()
            )));
        }
        if texts.len() < self.config.cv_folds {
            return Err(TribuneError::config(format!(
                "{} training records cannot fill {} folds",
                texts.len(),
                self.config.cv_folds
            )));
        }

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let configs: Vec<PipelineConfig> = (0..self.config.n_iter)
            .map(|_| self.sample_candidate(&mut rng))
            .collect();

        let folds = make_folds(texts.len(), self.config.cv_folds, &mut rng);

        info!(
            "evaluating {} candidates with {}-fold cross-validation",
            configs.len(),
            self.config.cv_folds
        );

        // Each candidate fit owns its vectorizer and weights; the parallel
        // collect keeps sampling order.
        let candidates: Vec<CandidateResult> = configs
            .into_par_iter()
            .map(|config| {
                let mean_accuracy = cross_validate(&config, texts, labels, &folds);
                CandidateResult {
                    config,
                    mean_accuracy,
                }
            })
            .collect();

        for (idx, candidate) in candidates.iter().enumerate() {
            match candidate.mean_accuracy {
                Some(accuracy) => debug!("candidate {idx}: accuracy {accuracy:.4}"),
                None => warn!("candidate {idx}: discarded (degenerate fit)"),
            }
        }

        let mut best_index = None;
        let mut best_accuracy = f64::NEG_INFINITY;
        for (idx, candidate) in candidates.iter().enumerate() {
            if let Some(accuracy) = candidate.mean_accuracy
                && accuracy > best_accuracy
            {
                best_accuracy = accuracy;
                best_index = Some(idx);
            }
        }

        let best_index = best_index.ok_or_else(|| {
            TribuneError::training("every candidate was discarded as degenerate")
        })?;

        let best_config = candidates[best_index].config.clone();
        info!(
            "best candidate {best_index}: accuracy {best_accuracy:.4}, refitting on full data"
        );

        let best = TextPipeline::fit(best_config.clone(), texts, labels)?;

        Ok(SearchOutcome {
            best,
            best_config,
            best_accuracy,
            candidates,
        })
    }

    fn sample_candidate(&self, rng: &mut StdRng) -> PipelineConfig {
        let mut config = self.base.clone();
        config.vectorizer.max_df = pick(&self.grid.max_df, rng);
        config.vectorizer.min_df = pick(&self.grid.min_df, rng);
        config.classifier.c = pick(&self.grid.c, rng);
        config.classifier.penalty = pick(&self.grid.penalty, rng);
        config.classifier.strategy = pick(&self.grid.strategy, rng);
        config
    }
}

fn pick<T: Copy>(values: &[T], rng: &mut StdRng) -> T {
    values[rng.random_range(0..values.len())]
}

/// Shuffle record indices and chunk them into `k` contiguous folds.
fn make_folds(n: usize, k: usize, rng: &mut StdRng) -> Vec<Vec<usize>> {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);

    let base = n / k;
    let remainder = n % k;

    let mut folds = Vec::with_capacity(k);
    let mut start = 0;
    for fold in 0..k {
        let size = base + usize::from(fold < remainder);
        folds.push(indices[start..start + size].to_vec());
        start += size;
    }
    folds
}

/// Mean validation accuracy over the folds, or `None` when any fold fit
/// degenerates.
fn cross_validate(
    config: &PipelineConfig,
    texts: &[String],
    labels: &[String],
    folds: &[Vec<usize>],
) -> Option<f64> {
    let mut total = 0.0;

    for held_out in folds {
        let mut train_texts = Vec::with_capacity(texts.len() - held_out.len());
        let mut train_labels = Vec::with_capacity(texts.len() - held_out.len());
        for fold in folds {
            if std::ptr::eq(fold, held_out) {
                continue;
            }
            for &idx in fold {
                train_texts.push(texts[idx].clone());
                train_labels.push(labels[idx].clone());
            }
        }

        let pipeline = TextPipeline::fit(config.clone(), &train_texts, &train_labels).ok()?;

        let mut correct = 0;
        for &idx in held_out {
            if pipeline.predict(&texts[idx]).ok()? == labels[idx] {
                correct += 1;
            }
        }
        total += correct as f64 / held_out.len().max(1) as f64;
    }

    Some(total / folds.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training_set() -> (Vec<String>, Vec<String>) {
        let mut texts = Vec::new();
        let mut labels = Vec::new();
        for i in 0..20 {
            texts.push(format!("vive la france numéro {i}"));
            labels.push("A".to_string());
            texts.push(format!("le peuple souverain numéro {i}"));
            labels.push("B".to_string());
        }
        (texts, labels)
    }

    fn small_grid() -> ParameterGrid {
        ParameterGrid {
            max_df: vec![1.0],
            min_df: vec![1],
            c: vec![1.0, 10.0],
            penalty: vec![Penalty::L2],
            strategy: vec![MulticlassStrategy::OneVsRest],
        }
    }

    #[test]
    fn test_search_finds_working_candidate() {
        let (texts, labels) = training_set();
        let search = RandomizedSearch::new(
            small_grid(),
            SearchConfig {
                n_iter: 4,
                cv_folds: 4,
                seed: 42,
            },
            PipelineConfig::default(),
        );

        let outcome = search.run(&texts, &labels).unwrap();
        assert_eq!(outcome.candidates.len(), 4);
        assert!(outcome.best_accuracy > 0.5);
        assert_eq!(outcome.best.predict("vive la france").unwrap(), "A");
    }

    #[test]
    fn test_degenerate_candidates_are_discarded() {
        let (texts, labels) = training_set();
        // min_df above the corpus size empties the vocabulary for one of
        // the sampled values; those candidates must be discarded, not
        // abort the search.
        let grid = ParameterGrid {
            min_df: vec![1, 1000],
            ..small_grid()
        };
        let search = RandomizedSearch::new(
            grid,
            SearchConfig {
                n_iter: 16,
                cv_folds: 4,
                seed: 7,
            },
            PipelineConfig::default(),
        );

        let outcome = search.run(&texts, &labels).unwrap();
        assert!(outcome.candidates.iter().any(|c| c.mean_accuracy.is_none()));
        assert!(outcome.best_accuracy > 0.0);
    }

    #[test]
    fn test_all_degenerate_is_error() {
        let (texts, labels) = training_set();
        let grid = ParameterGrid {
            min_df: vec![1000],
            ..small_grid()
        };
        let search = RandomizedSearch::new(
            grid,
            SearchConfig {
                n_iter: 3,
                cv_folds: 4,
                seed: 7,
            },
            PipelineConfig::default(),
        );

        assert!(search.run(&texts, &labels).is_err());
    }

    #[test]
    fn test_search_is_reproducible() {
        let (texts, labels) = training_set();
        let make = || {
            RandomizedSearch::new(
                small_grid(),
                SearchConfig {
                    n_iter: 4,
                    cv_folds: 4,
                    seed: 11,
                },
                PipelineConfig::default(),
            )
        };

        let a = make().run(&texts, &labels).unwrap();
        let b = make().run(&texts, &labels).unwrap();

        assert_eq!(a.best_config, b.best_config);
        assert_eq!(a.best_accuracy, b.best_accuracy);
    }

    #[test]
    fn test_invalid_search_config() {
        let (texts, labels) = training_set();
        let search = RandomizedSearch::new(
            small_grid(),
            SearchConfig {
                n_iter: 1,
                cv_folds: 1,
                seed: 0,
            },
            PipelineConfig::default(),
        );

        assert!(search.run(&texts, &labels).is_err());
    }

    #[test]
    fn test_make_folds_partition() {
        let mut rng = StdRng::seed_from_u64(3);
        let folds = make_folds(10, 3, &mut rng);

        assert_eq!(folds.len(), 3);
        let mut all: Vec<usize> = folds.iter().flatten().copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..10).collect::<Vec<_>>());
    }
}
