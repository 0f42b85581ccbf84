//! Per-speaker descriptive summaries.
//!
//! Reporting glue over the record store: tweet counts, date ranges,
//! favorite/retweet distributions and word counts per speaker.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::corpus::record::Corpus;

/// Descriptive summary of one speaker's tweet stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerSummary {
    /// Speaker identifier.
    pub speaker: String,
    /// Number of tweets.
    pub tweets: usize,
    /// Number of tweets with empty text.
    pub empty_texts: usize,
    /// Earliest tweet timestamp.
    pub first_tweet: DateTime<Utc>,
    /// Latest tweet timestamp.
    pub last_tweet: DateTime<Utc>,
    /// Favorite count distribution.
    pub favorites: CountSummary,
    /// Retweet count distribution.
    pub retweets: CountSummary,
    /// Mean number of whitespace-separated words per tweet.
    pub mean_word_count: f64,
}

/// Min / mean / max of a count variable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CountSummary {
    pub min: u64,
    pub mean: f64,
    pub max: u64,
}

impl CountSummary {
    fn from_counts(counts: &[u64]) -> Self {
        let min = counts.iter().copied().min().unwrap_or(0);
        let max = counts.iter().copied().max().unwrap_or(0);
        let mean = if counts.is_empty() {
            0.0
        } else {
            counts.iter().sum::<u64>() as f64 / counts.len() as f64
        };
        CountSummary { min, mean, max }
    }
}

/// Compute per-speaker summaries, one entry per speaker in lexicographic
/// order. Empty corpus yields an empty list.
pub fn speaker_summaries(corpus: &Corpus) -> Vec<SpeakerSummary> {
    corpus
        .speakers()
        .into_iter()
        .map(|speaker| {
            let records: Vec<_> = corpus
                .records()
                .iter()
                .filter(|r| r.speaker == speaker)
                .collect();

            let favorites: Vec<u64> = records.iter().map(|r| r.favorite_count).collect();
            let retweets: Vec<u64> = records.iter().map(|r| r.retweet_count).collect();
            let word_counts: Vec<usize> = records
                .iter()
                .map(|r| r.text.split_whitespace().count())
                .collect();

            SpeakerSummary {
                speaker,
                tweets: records.len(),
                empty_texts: records.iter().filter(|r| r.text.trim().is_empty()).count(),
                first_tweet: records.iter().map(|r| r.created_at).min().unwrap_or_default(),
                last_tweet: records.iter().map(|r| r.created_at).max().unwrap_or_default(),
                favorites: CountSummary::from_counts(&favorites),
                retweets: CountSummary::from_counts(&retweets),
                mean_word_count: if word_counts.is_empty() {
                    0.0
                } else {
                    word_counts.iter().sum::<usize>() as f64 / word_counts.len() as f64
                },
            }
        })
        .collect()
}

impl fmt::Display for SpeakerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.speaker)?;
        writeln!(
            f,
            "  tweets: {} ({} empty), {} -> {}",
            self.tweets,
            self.empty_texts,
            self.first_tweet.format("%Y-%m-%d"),
            self.last_tweet.format("%Y-%m-%d")
        )?;
        writeln!(
            f,
            "  favorites: min {} / mean {:.1} / max {}",
            self.favorites.min, self.favorites.mean, self.favorites.max
        )?;
        writeln!(
            f,
            "  retweets:  min {} / mean {:.1} / max {}",
            self.retweets.min, self.retweets.mean, self.retweets.max
        )?;
        write!(f, "  words per tweet: {:.1}", self.mean_word_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::record::TweetRecord;
    use chrono::TimeZone;

    #[test]
    fn test_speaker_summaries() {
        let corpus = Corpus::new(vec![
            TweetRecord {
                speaker: "A".to_string(),
                text: "un deux trois".to_string(),
                created_at: Utc.with_ymd_and_hms(2021, 9, 1, 0, 0, 0).unwrap(),
                favorite_count: 10,
                retweet_count: 1,
            },
            TweetRecord {
                speaker: "A".to_string(),
                text: "quatre".to_string(),
                created_at: Utc.with_ymd_and_hms(2021, 10, 1, 0, 0, 0).unwrap(),
                favorite_count: 30,
                retweet_count: 3,
            },
        ]);

        let summaries = speaker_summaries(&corpus);
        assert_eq!(summaries.len(), 1);

        let summary = &summaries[0];
        assert_eq!(summary.tweets, 2);
        assert_eq!(summary.empty_texts, 0);
        assert_eq!(summary.favorites.min, 10);
        assert_eq!(summary.favorites.max, 30);
        assert!((summary.favorites.mean - 20.0).abs() < f64::EPSILON);
        assert!((summary.mean_word_count - 2.0).abs() < f64::EPSILON);
        assert!(summary.first_tweet < summary.last_tweet);
    }

    #[test]
    fn test_empty_corpus() {
        assert!(speaker_summaries(&Corpus::default()).is_empty());
    }
}
