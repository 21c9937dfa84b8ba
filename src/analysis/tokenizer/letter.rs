//! Letter-run tokenizer implementation.

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, VeracityError};
use regex::Regex;
use std::sync::Arc;

/// A tokenizer that extracts maximal runs of ASCII letters and lowercases
/// them.
///
/// Each token is a contiguous run of `A`-`Z`/`a`-`z` bounded by a non-letter
/// character or a string edge on both sides (word-boundary semantics).
/// Digits, punctuation, and underscores are never part of a token and do
/// not merge adjacent letter runs: `"abc123def"` yields `abc` and `def`.
/// Tokens appear in left-to-right input order, duplicates retained.
///
/// Matching runs on the raw input and lowercasing each match keeps the
/// reported byte offsets valid for the original text.
///
/// # Examples
///
/// ```
/// use veracity::analysis::token::Token;
/// use veracity::analysis::tokenizer::{LetterTokenizer, Tokenizer};
///
/// let tokenizer = LetterTokenizer::new().unwrap();
/// let tokens: Vec<Token> = tokenizer.tokenize("Hello, World! 123").unwrap().collect();
///
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].text, "hello");
/// assert_eq!(tokens[1].text, "world");
/// ```
#[derive(Clone, Debug)]
pub struct LetterTokenizer {
    /// The regex pattern used to extract letter runs
    pattern: Arc<Regex>,
}

impl LetterTokenizer {
    /// Create a new letter tokenizer.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(r"[A-Za-z]+")
            .map_err(|e| VeracityError::analysis(format!("Invalid letter pattern: {e}")))?;

        Ok(LetterTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for LetterTokenizer {
    fn default() -> Self {
        Self::new().expect("Letter pattern should be valid")
    }
}

impl Tokenizer for LetterTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(
                    mat.as_str().to_ascii_lowercase(),
                    position,
                    mat.start(),
                    mat.end(),
                )
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "letter"
    }
}
