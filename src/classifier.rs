//! Probabilistic document classification.
//!
//! The classifier is trained once from a labeled corpus and then scores
//! arbitrary documents against the label set seen during training.

pub mod naive_bayes;

pub use naive_bayes::{LabeledDocument, NaiveBayesClassifier, Prediction};
