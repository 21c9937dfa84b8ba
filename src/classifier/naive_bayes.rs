//! Multinomial Naive Bayes text classifier.
//!
//! The model counts token occurrences per class over a labeled training
//! corpus and scores unseen documents in log space with add-one (Laplace)
//! smoothing. Smoothing guarantees a strictly positive probability for
//! tokens unseen in a class, including tokens entirely absent from the
//! training vocabulary, so a single unknown word cannot collapse a class
//! score to negative infinity.
//!
//! # Examples
//!
//! ```
//! use veracity::classifier::{LabeledDocument, NaiveBayesClassifier};
//!
//! let corpus = vec![
//!     LabeledDocument::new("what is machine learning", "Informational"),
//!     LabeledDocument::new("buy laptop online", "Transactional"),
//! ];
//!
//! let mut classifier = NaiveBayesClassifier::new().unwrap();
//! classifier.train(&corpus).unwrap();
//!
//! let prediction = classifier.predict("buy a new laptop").unwrap();
//! assert_eq!(prediction.label, "Transactional");
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::{LetterTokenizer, Tokenizer};
use crate::error::{Result, VeracityError};

/// A single training example: a document text with its class label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledDocument {
    /// Document text.
    pub text: String,
    /// Class label.
    pub label: String,
}

impl LabeledDocument {
    /// Create a new labeled document.
    pub fn new<T: Into<String>, L: Into<String>>(text: T, label: L) -> Self {
        LabeledDocument {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// The outcome of classifying one document.
///
/// The scores are natural-log likelihoods, not probabilities: they are
/// negative numbers with no fixed floor and do not sum to 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// The chosen label.
    pub label: String,
    /// Log-score per label seen during training.
    pub log_scores: HashMap<String, f64>,
}

/// Multinomial Naive Bayes classifier over bag-of-words features.
///
/// The label set is determined entirely by the training corpus; a label
/// never seen during training cannot be predicted. Model state is owned
/// by the instance and populated by a single [`train`](Self::train) call;
/// [`predict`](Self::predict) takes `&self` and never mutates, so a
/// trained instance can be shared across threads without synchronization.
pub struct NaiveBayesClassifier {
    /// Tokenizer used for training documents and prediction input.
    tokenizer: Arc<dyn Tokenizer>,
    /// Count of training documents per label.
    class_document_counts: HashMap<String, u64>,
    /// Token occurrence counts per label.
    word_counts: HashMap<String, HashMap<String, u64>>,
    /// Total token occurrences per label.
    class_total_words: HashMap<String, u64>,
    /// Distinct tokens across the entire training corpus.
    vocabulary: HashSet<String>,
    /// Count of training examples seen.
    total_documents: u64,
}

impl std::fmt::Debug for NaiveBayesClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaiveBayesClassifier")
            .field("labels", &self.class_document_counts.len())
            .field("vocabulary_size", &self.vocabulary.len())
            .field("total_documents", &self.total_documents)
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl NaiveBayesClassifier {
    /// Create a new untrained classifier using the letter tokenizer.
    pub fn new() -> Result<Self> {
        Ok(Self::with_tokenizer(Arc::new(LetterTokenizer::new()?)))
    }

    /// Create a new untrained classifier with the specified tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        NaiveBayesClassifier {
            tokenizer,
            class_document_counts: HashMap::new(),
            word_counts: HashMap::new(),
            class_total_words: HashMap::new(),
            vocabulary: HashSet::new(),
            total_documents: 0,
        }
    }

    /// Train the model from a labeled corpus.
    ///
    /// Example order is irrelevant to the final model state. Intended to
    /// be called exactly once per instance: a second call accumulates into
    /// the live counters and overwrites the document total, which is a
    /// documented limitation, not supported behavior.
    ///
    /// # Errors
    ///
    /// Returns [`VeracityError::EmptyCorpus`] if `examples` is empty,
    /// rather than leaving a model whose every prediction would divide
    /// by zero.
    pub fn train(&mut self, examples: &[LabeledDocument]) -> Result<()> {
        if examples.is_empty() {
            return Err(VeracityError::empty_corpus(
                "at least one labeled document is required",
            ));
        }

        self.total_documents = examples.len() as u64;
        for example in examples {
            *self
                .class_document_counts
                .entry(example.label.clone())
                .or_insert(0) += 1;

            let tokens = self.tokenizer.tokenize(&example.text)?;
            let counts = self.word_counts.entry(example.label.clone()).or_default();
            for token in tokens {
                *counts.entry(token.text.clone()).or_insert(0) += 1;
                *self
                    .class_total_words
                    .entry(example.label.clone())
                    .or_insert(0) += 1;
                self.vocabulary.insert(token.text);
            }
        }

        Ok(())
    }

    /// Classify a document against the labels seen during training.
    ///
    /// For each label the score is the log prior plus one smoothed
    /// log-likelihood term per input token occurrence:
    ///
    /// ```text
    /// ln(docs(label) / total_docs)
    ///   + Σ ln((count(label, token) + 1) / (total_words(label) + |vocabulary|))
    /// ```
    ///
    /// Empty input degenerates to a pure prior comparison without error.
    /// Ties resolve to the lexicographically smallest label among the
    /// maxima.
    ///
    /// # Errors
    ///
    /// Returns [`VeracityError::UntrainedModel`] if called before
    /// [`train`](Self::train).
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        if self.total_documents == 0 {
            return Err(VeracityError::untrained_model(
                "train must be called before predict",
            ));
        }

        let tokens: Vec<String> = self
            .tokenizer
            .tokenize(text)?
            .map(|token| token.text)
            .collect();

        let total_documents = self.total_documents as f64;
        let vocabulary_size = self.vocabulary.len() as f64;

        let mut log_scores = HashMap::with_capacity(self.class_document_counts.len());
        for (label, &document_count) in &self.class_document_counts {
            let mut log_score = (document_count as f64 / total_documents).ln();

            // A corpus with no letter runs at all leaves the vocabulary
            // empty; the smoothed denominator would be zero, so scoring
            // falls back to the priors alone.
            if vocabulary_size > 0.0 {
                let counts = self.word_counts.get(label);
                let class_total = self.class_total_words.get(label).copied().unwrap_or(0) as f64;
                for token in &tokens {
                    let count = counts
                        .and_then(|c| c.get(token))
                        .copied()
                        .unwrap_or(0) as f64;
                    log_score += ((count + 1.0) / (class_total + vocabulary_size)).ln();
                }
            }

            log_scores.insert(label.clone(), log_score);
        }

        // Scan labels in sorted order, replacing the leader only on a
        // strictly greater score, so ties resolve to the lexicographically
        // smallest label.
        let mut labels: Vec<&String> = log_scores.keys().collect();
        labels.sort_unstable();
        let mut best_label = labels[0];
        for &label in labels.iter().skip(1) {
            if log_scores[label] > log_scores[best_label] {
                best_label = label;
            }
        }

        Ok(Prediction {
            label: best_label.clone(),
            log_scores,
        })
    }

    /// Check whether the model has been trained.
    pub fn is_trained(&self) -> bool {
        self.total_documents > 0
    }

    /// Get the labels seen during training, sorted.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.class_document_counts.keys().cloned().collect();
        labels.sort_unstable();
        labels
    }

    /// Get the number of training documents bearing the given label.
    pub fn document_count(&self, label: &str) -> u64 {
        self.class_document_counts.get(label).copied().unwrap_or(0)
    }

    /// Get the occurrence count of a token within a label's documents.
    pub fn word_count(&self, label: &str, token: &str) -> u64 {
        self.word_counts
            .get(label)
            .and_then(|counts| counts.get(token))
            .copied()
            .unwrap_or(0)
    }

    /// Get the total token occurrences across a label's documents.
    pub fn class_token_total(&self, label: &str) -> u64 {
        self.class_total_words.get(label).copied().unwrap_or(0)
    }

    /// Get the number of distinct tokens seen across the training corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Get the number of training examples seen.
    pub fn total_documents(&self) -> u64 {
        self.total_documents
    }
}
