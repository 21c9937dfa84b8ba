//! Text analysis: token types and tokenizers.
//!
//! Analysis turns raw document text into the normalized word tokens the
//! classifier counts. The pipeline is deliberately small: a [`Tokenizer`]
//! produces a [`TokenStream`], and the classifier consumes it.
//!
//! [`Tokenizer`]: tokenizer::Tokenizer
//! [`TokenStream`]: token::TokenStream

pub mod token;
pub mod tokenizer;
