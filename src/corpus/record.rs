//! Tweet record types and corpus-level helpers.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single labeled tweet as ingested from the dataset.
///
/// Records are created at ingestion and immutable afterwards. The speaker
/// identifier is always present and drawn from the dataset's speaker set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweetRecord {
    /// Speaker (author) identifier, e.g. `"Marine_Lepen"`.
    #[serde(rename = "user_id")]
    pub speaker: String,

    /// Raw tweet text.
    pub text: String,

    /// Creation timestamp.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,

    /// Number of favorites.
    pub favorite_count: u64,

    /// Number of retweets.
    pub retweet_count: u64,
}

/// An unlabeled tweet, used purely for prediction.
///
/// Same schema as [`TweetRecord`] minus the speaker column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlabeledTweet {
    /// Raw tweet text.
    pub text: String,

    /// Creation timestamp.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,

    /// Number of favorites.
    pub favorite_count: u64,

    /// Number of retweets.
    pub retweet_count: u64,
}

/// An in-memory collection of labeled tweet records.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<TweetRecord>,
}

impl Corpus {
    /// Create a corpus from a list of records.
    pub fn new(records: Vec<TweetRecord>) -> Self {
        Corpus { records }
    }

    /// Get the records in ingestion order.
    pub fn records(&self) -> &[TweetRecord] {
        &self.records
    }

    /// Number of records in the corpus.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The distinct speaker identifiers, in lexicographic order.
    pub fn speakers(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.speaker.as_str()).collect();
        set.into_iter().map(String::from).collect()
    }

    /// Keep only records created at or after the given instant.
    pub fn filter_since(&self, since: DateTime<Utc>) -> Corpus {
        let records = self
            .records
            .iter()
            .filter(|r| r.created_at >= since)
            .cloned()
            .collect();
        Corpus { records }
    }

    /// Keep only records from the given speakers.
    pub fn filter_speakers(&self, speakers: &[String]) -> Corpus {
        let records = self
            .records
            .iter()
            .filter(|r| speakers.iter().any(|s| s == &r.speaker))
            .cloned()
            .collect();
        Corpus { records }
    }

    /// All texts of one speaker joined into a single document.
    pub fn speaker_document(&self, speaker: &str) -> String {
        let texts: Vec<&str> = self
            .records
            .iter()
            .filter(|r| r.speaker == speaker)
            .map(|r| r.text.as_str())
            .collect();
        texts.join(" ")
    }
}

impl From<Vec<TweetRecord>> for Corpus {
    fn from(records: Vec<TweetRecord>) -> Self {
        Corpus::new(records)
    }
}

/// Serde adapter for the dataset's `"%Y-%m-%d %H:%M:%S"` timestamps.
///
/// Deserialization also accepts RFC 3339 so JSON round-trips keep working.
pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Ok(naive) = NaiveDateTime::parse_from_str(&raw, FORMAT) {
            return Ok(naive.and_utc());
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| D::Error::custom(format!("invalid timestamp '{raw}'")))
    }
}
