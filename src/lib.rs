//! # Veracity
//!
//! A probabilistic bag-of-words text classifier for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Multinomial Naive Bayes with add-one (Laplace) smoothing
//! - Log-space scoring, safe for long documents
//! - Pluggable tokenizers
//! - JSON corpus loading
//!
//! ## Example
//!
//! ```
//! use veracity::classifier::{LabeledDocument, NaiveBayesClassifier};
//!
//! let corpus = vec![
//!     LabeledDocument::new("the economy grew steadily this year", "Legit"),
//!     LabeledDocument::new("aliens stole the election with secret lasers", "Fake"),
//! ];
//!
//! let mut classifier = NaiveBayesClassifier::new().unwrap();
//! classifier.train(&corpus).unwrap();
//!
//! let prediction = classifier.predict("the economy grew this year").unwrap();
//! assert_eq!(prediction.label, "Legit");
//! ```

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod corpus;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
