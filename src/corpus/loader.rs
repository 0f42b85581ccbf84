//! CSV loading for the tweet dataset.
//!
//! The expected labeled schema is a header row with the columns `user_id`,
//! `text`, `created_at`, `favorite_count`, `retweet_count`. The unlabeled
//! "mystery" schema is the same minus `user_id`. Schema drift (a missing
//! column, an unparseable value) fails fast with a diagnostic naming the
//! offending column or record and the file path.

use std::path::Path;

use log::info;

use crate::corpus::record::{Corpus, TweetRecord, UnlabeledTweet};
use crate::error::{Result, TribuneError};

/// Required columns of the labeled dataset.
const LABELED_COLUMNS: &[&str] = &[
    "user_id",
    "text",
    "created_at",
    "favorite_count",
    "retweet_count",
];

/// Required columns of the unlabeled dataset.
const UNLABELED_COLUMNS: &[&str] = &["text", "created_at", "favorite_count", "retweet_count"];

/// Load the labeled tweet dataset from a CSV file.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Corpus> {
    let path = path.as_ref();
    let mut reader = open_reader(path, LABELED_COLUMNS)?;

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<TweetRecord>().enumerate() {
        let record = result.map_err(|e| record_error(path, row, e))?;
        records.push(record);
    }

    info!("loaded {} tweets from {}", records.len(), path.display());
    Ok(Corpus::new(records))
}

/// Load an unlabeled "mystery" dataset from a CSV file.
pub fn load_unlabeled<P: AsRef<Path>>(path: P) -> Result<Vec<UnlabeledTweet>> {
    let path = path.as_ref();
    let mut reader = open_reader(path, UNLABELED_COLUMNS)?;

    let mut tweets = Vec::new();
    for (row, result) in reader.deserialize::<UnlabeledTweet>().enumerate() {
        let tweet = result.map_err(|e| record_error(path, row, e))?;
        tweets.push(tweet);
    }

    info!(
        "loaded {} unlabeled tweets from {}",
        tweets.len(),
        path.display()
    );
    Ok(tweets)
}

/// Open a CSV reader and verify the header carries every required column.
fn open_reader(path: &Path, required: &[&str]) -> Result<csv::Reader<std::fs::File>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        TribuneError::Schema(format!("cannot open dataset {}: {e}", path.display()))
    })?;

    let headers = reader
        .headers()
        .map_err(|e| {
            TribuneError::Schema(format!("cannot read header of {}: {e}", path.display()))
        })?
        .clone();

    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(TribuneError::Schema(format!(
                "missing column '{column}' in {}",
                path.display()
            )));
        }
    }

    Ok(reader)
}

fn record_error(path: &Path, row: usize, error: csv::Error) -> TribuneError {
    // Row index is 0-based over data rows; +2 accounts for the header line.
    TribuneError::Schema(format!(
        "invalid record at {}:{}: {error}",
        path.display(),
        row + 2
    ))
}
