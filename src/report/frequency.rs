//! Word-frequency distributions.

use ahash::AHashMap;

/// Frequency distribution over the words of a document.
///
/// # Examples
///
/// ```
/// use tribune::report::frequency::FrequencyDistribution;
///
/// let dist = FrequencyDistribution::from_text("vive vive la france");
/// assert_eq!(dist.count("vive"), 2);
/// assert_eq!(dist.distinct(), 3);
/// assert_eq!(dist.most_common(1)[0].0, "vive");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrequencyDistribution {
    counts: AHashMap<String, usize>,
    total: usize,
}

impl FrequencyDistribution {
    /// Count the whitespace-separated words of a text.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    /// Count words from an iterator.
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = AHashMap::new();
        let mut total = 0;
        for word in words {
            *counts.entry(word.to_string()).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Occurrences of one word.
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of counted words.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The `n` most frequent words with their counts, most frequent
    /// first. Ties order alphabetically so output is stable.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();

        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }

    /// Iterate over all (word, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting() {
        let dist = FrequencyDistribution::from_text("la france la république");

        assert_eq!(dist.count("la"), 2);
        assert_eq!(dist.count("france"), 1);
        assert_eq!(dist.count("absent"), 0);
        assert_eq!(dist.total(), 4);
        assert_eq!(dist.distinct(), 3);
    }

    #[test]
    fn test_most_common_ordering() {
        let dist = FrequencyDistribution::from_text("b b b a a c");
        let top = dist.most_common(2);

        assert_eq!(top, vec![("b".to_string(), 3), ("a".to_string(), 2)]);
    }

    #[test]
    fn test_most_common_tie_break_is_alphabetic() {
        let dist = FrequencyDistribution::from_text("z a m");
        let top = dist.most_common(3);

        let words: Vec<&str> = top.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["a", "m", "z"]);
    }

    #[test]
    fn test_empty_text() {
        let dist = FrequencyDistribution::from_text("");
        assert_eq!(dist.total(), 0);
        assert!(dist.most_common(5).is_empty());
    }
}
