//! Stratified train/test splitting.

use ahash::AHashMap;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::corpus::record::{Corpus, TweetRecord};
use crate::error::{Result, TribuneError};

/// Split a corpus into training and test subsets, stratified by speaker.
///
/// Each speaker contributes `test_ratio` of their own records (rounded) to
/// the test subset, so per-class proportions in both subsets stay close to
/// the full-corpus proportions. Shuffling is seeded for reproducibility.
///
/// `test_ratio` must lie strictly between 0 and 1.
///
/// # Examples
///
/// ```
/// use tribune::corpus::{Corpus, train_test_split};
///
/// let corpus = Corpus::new(vec![]);
/// assert!(train_test_split(&corpus, 1.5, 123).is_err());
/// ```
pub fn train_test_split(
    corpus: &Corpus,
    test_ratio: f64,
    seed: u64,
) -> Result<(Vec<TweetRecord>, Vec<TweetRecord>)> {
    if !(test_ratio > 0.0 && test_ratio < 1.0) {
        return Err(TribuneError::config(format!(
            "test_ratio must be in (0, 1), got {test_ratio}"
        )));
    }

    let mut by_speaker: AHashMap<&str, Vec<usize>> = AHashMap::new();
    for (idx, record) in corpus.records().iter().enumerate() {
        by_speaker.entry(record.speaker.as_str()).or_default().push(idx);
    }

    // Deterministic iteration order so the same seed gives the same split.
    let mut speakers: Vec<&str> = by_speaker.keys().copied().collect();
    speakers.sort_unstable();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train = Vec::new();
    let mut test = Vec::new();

    for speaker in speakers {
        let mut indices = by_speaker.remove(speaker).unwrap_or_default();
        indices.shuffle(&mut rng);

        let n_test = ((indices.len() as f64) * test_ratio).round() as usize;
        for (i, idx) in indices.into_iter().enumerate() {
            let record = corpus.records()[idx].clone();
            if i < n_test {
                test.push(record);
            } else {
                train.push(record);
            }
        }
    }

    Ok((train, test))
}
