//! Character-level filters applied before tokenization.
//!
//! Tweets carry syntax that only adds noise to the analysis: links,
//! hashtags, mentions, digit runs. These are scrubbed with regular
//! expressions over the raw (lowercased) text before the tokenizer runs.
//!
//! The removal order matters: links before tags before numbers. A link can
//! visually contain digit sequences that must not be stripped on their own
//! once the link is gone, and tag removal relies on mentions still being
//! followed by whitespace before number stripping reshapes spacing.

use regex::Regex;

use crate::error::{Result, TribuneError};

/// Trait for character-level filters that rewrite text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Rewrite the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A char filter that deletes every match of a regex pattern.
pub struct PatternStripFilter {
    pattern: Regex,
    name: &'static str,
}

impl PatternStripFilter {
    /// Create a new pattern strip filter.
    pub fn new(pattern: &str, name: &'static str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| TribuneError::analysis(format!("invalid pattern '{pattern}': {e}")))?,
            name,
        })
    }

    /// Strip URL substrings (`scheme://` up to the next whitespace).
    pub fn links() -> Result<Self> {
        Self::new(r"https?://\S+", "strip_links")
    }

    /// Strip hashtags and mentions, including one trailing delimiter.
    ///
    /// Known quirk, kept as observed behavior: a tag at the very end of the
    /// text with no trailing whitespace is not removed, because the pattern
    /// requires the whitespace that follows the tag.
    pub fn tags() -> Result<Self> {
        Self::new(r"[@#]\S+\s+", "strip_tags")
    }

    /// Strip number-like substrings, including times ("20h30") and decimals.
    pub fn numbers() -> Result<Self> {
        Self::new(r"\d+[h., ]?\d*", "strip_numbers")
    }
}

impl CharFilter for PatternStripFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern.replace_all(input, "").into_owned()
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
