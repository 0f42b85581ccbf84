//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the normalization pipeline:
//! the tokenizer produces them with a [`TokenKind`], filters mark or drop
//! them, and the lemma filter attaches the dictionary form.
//!
//! # Examples
//!
//! ```
//! use tribune::analysis::token::{Token, TokenKind};
//!
//! let token = Token::new("mangeons", 0).with_lemma("manger");
//! assert_eq!(token.text, "mangeons");
//! assert_eq!(token.lemma_or_text(), "manger");
//! assert_eq!(token.kind, TokenKind::Word);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a tokenized segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A word-like segment (contains at least one alphanumeric character).
    Word,
    /// A punctuation segment.
    Punctuation,
    /// A whitespace-only segment.
    Whitespace,
}

/// A single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form of the token.
    pub text: String,

    /// The dictionary form, when a lemma filter has run.
    pub lemma: Option<String>,

    /// The position of the token in the token stream (0-based).
    pub position: usize,

    /// The byte offset where this token starts in the scrubbed text.
    pub start_offset: usize,

    /// The byte offset where this token ends in the scrubbed text.
    pub end_offset: usize,

    /// Segment classification.
    pub kind: TokenKind,

    /// Whether a filter marked this token as a stopword.
    pub stopped: bool,
}

impl Token {
    /// Create a new word token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            lemma: None,
            position,
            start_offset: 0,
            end_offset: 0,
            kind: TokenKind::Word,
            stopped: false,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            lemma: None,
            position,
            start_offset,
            end_offset,
            kind: TokenKind::Word,
            stopped: false,
        }
    }

    /// Set the segment kind.
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }

    /// Attach a lemma.
    pub fn with_lemma<S: Into<String>>(mut self, lemma: S) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    /// Mark this token as a stopword.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is marked as a stopword.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Check if this token is punctuation.
    pub fn is_punctuation(&self) -> bool {
        self.kind == TokenKind::Punctuation
    }

    /// Check if this token is whitespace-only.
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// The lemma when present, otherwise the surface form.
    pub fn lemma_or_text(&self) -> &str {
        self.lemma.as_deref().unwrap_or(&self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream is a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
