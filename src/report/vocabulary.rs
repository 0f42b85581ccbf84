//! Comparative vocabulary between two speakers.
//!
//! For every term the two speakers use, the comparison computes per-
//! speaker frequencies, scales them to dense ranks in [0, 1], and scores
//! each term by rank difference: +1 means the term is characteristic of
//! the first speaker, -1 of the second. The result renders as a
//! standalone HTML scatter document, a write-only output that is never
//! consumed back.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TribuneError};
use crate::report::frequency::FrequencyDistribution;

/// Configuration of the comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyComparisonConfig {
    /// Terms with fewer total occurrences are dropped.
    pub minimum_term_frequency: usize,
    /// Only the most frequent terms overall are kept.
    pub max_terms: usize,
}

impl Default for VocabularyComparisonConfig {
    fn default() -> Self {
        Self {
            minimum_term_frequency: 10,
            max_terms: 4000,
        }
    }
}

impl VocabularyComparisonConfig {
    fn validate(&self) -> Result<()> {
        if self.minimum_term_frequency < 1 {
            return Err(TribuneError::config(
                "minimum_term_frequency must be at least 1",
            ));
        }
        if self.max_terms < 1 {
            return Err(TribuneError::config("max_terms must be at least 1"));
        }
        Ok(())
    }
}

/// One term with its per-speaker statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermAssociation {
    pub term: String,
    /// Occurrences in the first speaker's tweets.
    pub count_first: usize,
    /// Occurrences in the second speaker's tweets.
    pub count_second: usize,
    /// Dense rank of the frequency among the first speaker's terms, in [0, 1].
    pub rank_first: f64,
    /// Dense rank among the second speaker's terms, in [0, 1].
    pub rank_second: f64,
    /// Rank difference, in [-1, 1]. Positive favors the first speaker.
    pub score: f64,
}

/// The comparative vocabulary of two speakers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyComparison {
    pub first_speaker: String,
    pub second_speaker: String,
    /// Terms sorted by descending score.
    pub terms: Vec<TermAssociation>,
}

impl VocabularyComparison {
    /// Build the comparison from each speaker's concatenated normalized
    /// text.
    pub fn build(
        first_speaker: &str,
        first_document: &str,
        second_speaker: &str,
        second_document: &str,
        config: &VocabularyComparisonConfig,
    ) -> Result<Self> {
        config.validate()?;

        let first = FrequencyDistribution::from_text(first_document);
        let second = FrequencyDistribution::from_text(second_document);

        let vocabulary: BTreeSet<String> = first
            .iter()
            .chain(second.iter())
            .map(|(term, _)| term.to_string())
            .collect();

        let mut entries: Vec<(String, usize, usize)> = vocabulary
            .into_iter()
            .map(|term| {
                let a = first.count(&term);
                let b = second.count(&term);
                (term, a, b)
            })
            .filter(|(_, a, b)| a + b >= config.minimum_term_frequency)
            .collect();

        // Compaction: keep the most frequent terms overall.
        entries.sort_by(|x, y| (y.1 + y.2).cmp(&(x.1 + x.2)).then_with(|| x.0.cmp(&y.0)));
        entries.truncate(config.max_terms);

        let rank_first = dense_ranks(entries.iter().map(|(_, a, _)| *a).collect());
        let rank_second = dense_ranks(entries.iter().map(|(_, _, b)| *b).collect());

        let mut terms: Vec<TermAssociation> = entries
            .into_iter()
            .zip(rank_first.into_iter().zip(rank_second))
            .map(|((term, count_first, count_second), (rank_first, rank_second))| {
                TermAssociation {
                    term,
                    count_first,
                    count_second,
                    rank_first,
                    rank_second,
                    score: rank_first - rank_second,
                }
            })
            .collect();

        terms.sort_by(|x, y| y.score.total_cmp(&x.score).then_with(|| x.term.cmp(&y.term)));

        Ok(Self {
            first_speaker: first_speaker.to_string(),
            second_speaker: second_speaker.to_string(),
            terms,
        })
    }

    /// The `n` terms most associated with the first speaker.
    pub fn top_first(&self, n: usize) -> &[TermAssociation] {
        &self.terms[..n.min(self.terms.len())]
    }

    /// The `n` terms most associated with the second speaker.
    pub fn top_second(&self, n: usize) -> Vec<&TermAssociation> {
        self.terms.iter().rev().take(n).collect()
    }

    /// Render the comparison as a standalone HTML scatter document.
    pub fn write_html<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_html()).map_err(|e| {
            TribuneError::Other(format!("cannot write {}: {e}", path.display()))
        })
    }

    fn to_html(&self) -> String {
        const SIZE: f64 = 640.0;
        const MARGIN: f64 = 40.0;

        let mut circles = String::new();
        for term in &self.terms {
            let x = MARGIN + term.rank_first * (SIZE - 2.0 * MARGIN);
            // SVG y grows downward; high second-speaker rank plots high.
            let y = SIZE - MARGIN - term.rank_second * (SIZE - 2.0 * MARGIN);
            let term_name = escape_html(&term.term);
            circles.push_str(&format!(
                "    <circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"3\" fill=\"#4682b4\" \
                 fill-opacity=\"0.6\"><title>{term_name} ({} / {})</title></circle>\n",
                term.count_first, term.count_second
            ));
        }

        let list = |terms: Vec<&TermAssociation>| {
            terms
                .iter()
                .map(|t| format!("      <li>{} ({:+.2})</li>\n", escape_html(&t.term), t.score))
                .collect::<String>()
        };
        let first_list = list(self.top_first(20).iter().collect());
        let second_list = list(self.top_second(20));

        format!(
            "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{first} vs {second}</title>\n</head>\n<body>\n\
             <h1>Vocabulaire : {first} vs {second}</h1>\n\
             <svg width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n\
             <rect width=\"{size}\" height=\"{size}\" fill=\"#fafafa\"/>\n{circles}\
             <text x=\"{half}\" y=\"{bottom}\" text-anchor=\"middle\">rang {first}</text>\n\
             <text x=\"14\" y=\"{half}\" text-anchor=\"middle\" \
             transform=\"rotate(-90 14 {half})\">rang {second}</text>\n</svg>\n\
             <h2>Termes de {first}</h2>\n    <ul>\n{first_list}    </ul>\n\
             <h2>Termes de {second}</h2>\n    <ul>\n{second_list}    </ul>\n\
             </body>\n</html>\n",
            first = escape_html(&self.first_speaker),
            second = escape_html(&self.second_speaker),
            size = SIZE,
            half = SIZE / 2.0,
            bottom = SIZE - 8.0,
        )
    }
}

/// Dense ranks of the counts, scaled to [0, 1]. Ties share a rank.
fn dense_ranks(counts: Vec<usize>) -> Vec<f64> {
    let mut distinct: Vec<usize> = counts.clone();
    distinct.sort_unstable();
    distinct.dedup();

    let max_rank = (distinct.len().saturating_sub(1)).max(1) as f64;
    counts
        .into_iter()
        .map(|count| {
            let rank = distinct.binary_search(&count).unwrap_or(0);
            rank as f64 / max_rank
        })
        .collect()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(min_freq: usize) -> VocabularyComparisonConfig {
        VocabularyComparisonConfig {
            minimum_term_frequency: min_freq,
            max_terms: 4000,
        }
    }

    #[test]
    fn test_scores_favor_the_right_speaker() {
        let comparison = VocabularyComparison::build(
            "EZ",
            "immigration immigration immigration france france",
            "JLM",
            "retraite retraite retraite france france",
            &config(1),
        )
        .unwrap();

        let immigration = comparison
            .terms
            .iter()
            .find(|t| t.term == "immigration")
            .unwrap();
        let retraite = comparison.terms.iter().find(|t| t.term == "retraite").unwrap();

        assert!(immigration.score > 0.0);
        assert!(retraite.score < 0.0);
        assert_eq!(comparison.terms[0].term, "immigration");
    }

    #[test]
    fn test_shared_terms_score_near_zero() {
        let comparison = VocabularyComparison::build(
            "A",
            "france france emploi",
            "B",
            "france france santé",
            &config(1),
        )
        .unwrap();

        let france = comparison.terms.iter().find(|t| t.term == "france").unwrap();
        assert!(france.score.abs() < 0.5);
    }

    #[test]
    fn test_minimum_frequency_filter() {
        let comparison = VocabularyComparison::build(
            "A",
            "commun commun commun rare",
            "B",
            "commun commun",
            &config(3),
        )
        .unwrap();

        assert!(comparison.terms.iter().all(|t| t.term != "rare"));
        assert!(comparison.terms.iter().any(|t| t.term == "commun"));
    }

    #[test]
    fn test_compaction_keeps_most_frequent() {
        let comparison = VocabularyComparison::build(
            "A",
            "un un un deux deux trois",
            "B",
            "un un deux",
            &VocabularyComparisonConfig {
                minimum_term_frequency: 1,
                max_terms: 2,
            },
        )
        .unwrap();

        assert_eq!(comparison.terms.len(), 2);
        assert!(comparison.terms.iter().all(|t| t.term != "trois"));
    }

    #[test]
    fn test_html_artifact() {
        let comparison = VocabularyComparison::build(
            "EZ",
            "immigration france",
            "JLM",
            "retraite france",
            &config(1),
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compare.html");
        comparison.write_html(&path).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("<svg"));
        assert!(html.contains("immigration"));
        assert!(html.contains("EZ"));
    }

    #[test]
    fn test_invalid_config() {
        let err = VocabularyComparison::build(
            "A",
            "a",
            "B",
            "b",
            &VocabularyComparisonConfig {
                minimum_term_frequency: 0,
                max_terms: 10,
            },
        )
        .unwrap_err();

        assert!(err.to_string().contains("minimum_term_frequency"));
    }
}
