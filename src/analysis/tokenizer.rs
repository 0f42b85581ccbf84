//! Tokenizer implementations for text analysis.

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenKind, TokenStream};
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer that splits text on Unicode word boundaries (UAX #29).
///
/// Every segment is kept and classified as word, punctuation, or
/// whitespace, so downstream filters decide what survives. Accented French
/// words come through as single tokens.
///
/// # Examples
///
/// ```
/// use tribune::analysis::token::TokenKind;
/// use tribune::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
///
/// let tokenizer = UnicodeWordTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("élysée, demain").unwrap().collect();
///
/// assert_eq!(tokens[0].text, "élysée");
/// assert_eq!(tokens[1].kind, TokenKind::Punctuation);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }

    fn classify(segment: &str) -> TokenKind {
        if segment.chars().any(|c| c.is_alphanumeric()) {
            TokenKind::Word
        } else if segment.chars().all(|c| c.is_whitespace()) {
            TokenKind::Whitespace
        } else {
            TokenKind::Punctuation
        }
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut offset = 0;
        let tokens: Vec<Token> = text
            .split_word_bounds()
            .enumerate()
            .map(|(position, segment)| {
                let start_offset = offset;
                offset += segment.len();
                Token::with_offsets(segment, position, start_offset, offset)
                    .with_kind(Self::classify(segment))
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_words_and_punctuation() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("bonjour, le monde !").unwrap().collect();

        let words: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Word)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(words, vec!["bonjour", "le", "monde"]);

        assert!(tokens.iter().any(|t| t.kind == TokenKind::Punctuation));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Whitespace));
    }

    #[test]
    fn test_accented_words_stay_whole() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("élection sénatoriale").unwrap().collect();

        let words: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Word)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(words, vec!["élection", "sénatoriale"]);
    }

    #[test]
    fn test_offsets_are_contiguous() {
        let tokenizer = UnicodeWordTokenizer::new();
        let text = "ça va bien";
        let tokens: Vec<Token> = tokenizer.tokenize(text).unwrap().collect();

        for token in &tokens {
            assert_eq!(&text[token.start_offset..token.end_offset], token.text);
        }
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("").unwrap().collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(UnicodeWordTokenizer::new().name(), "unicode_word");
    }
}
