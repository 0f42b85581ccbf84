//! Word-cloud term weights.
//!
//! A JSON artifact of the top-N weighted terms for one speaker, consumed
//! by an external word-cloud renderer. Write-only output.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TribuneError};
use crate::report::frequency::FrequencyDistribution;

/// The word-cloud artifact for one speaker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordCloudArtifact {
    /// Speaker the terms belong to.
    pub speaker: String,
    /// Terms with their relative weights, heaviest first.
    pub terms: Vec<WeightedTerm>,
}

/// One term with its weight in (0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedTerm {
    pub term: String,
    pub weight: f64,
}

impl WordCloudArtifact {
    /// Build the artifact from a speaker's concatenated normalized text.
    ///
    /// Weights are counts scaled by the maximum count, so the heaviest
    /// term has weight 1.0.
    pub fn from_document(speaker: &str, document: &str, max_terms: usize) -> Self {
        let distribution = FrequencyDistribution::from_text(document);
        let top = distribution.most_common(max_terms);
        let heaviest = top.first().map(|(_, count)| *count).unwrap_or(1) as f64;

        let terms = top
            .into_iter()
            .map(|(term, count)| WeightedTerm {
                term,
                weight: count as f64 / heaviest,
            })
            .collect();

        Self {
            speaker: speaker.to_string(),
            terms,
        }
    }

    /// Write the artifact as pretty-printed JSON.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| {
            TribuneError::Other(format!("cannot write {}: {e}", path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_scaled_to_heaviest() {
        let artifact =
            WordCloudArtifact::from_document("MLP", "france france france peuple peuple nation", 10);

        assert_eq!(artifact.terms.len(), 3);
        assert_eq!(artifact.terms[0].term, "france");
        assert!((artifact.terms[0].weight - 1.0).abs() < f64::EPSILON);
        assert!(artifact.terms[1].weight < 1.0);
    }

    #[test]
    fn test_max_terms_respected() {
        let artifact = WordCloudArtifact::from_document("EZ", "a b c d e f", 3);
        assert_eq!(artifact.terms.len(), 3);
    }

    #[test]
    fn test_write_json() {
        let artifact = WordCloudArtifact::from_document("JLM", "peuple souverain", 5);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloud.json");

        artifact.write_json(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: WordCloudArtifact = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.speaker, "JLM");
        assert_eq!(parsed.terms.len(), 2);
    }

    #[test]
    fn test_unwritable_path_names_file() {
        let artifact = WordCloudArtifact::from_document("EM", "ensemble", 5);
        let err = artifact.write_json("/nonexistent/dir/cloud.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dir/cloud.json"));
    }
}
