//! Corpus loading for classifier training.
//!
//! A corpus file is a JSON object mapping each class label to an array of
//! document texts:
//!
//! ```json
//! {
//!     "Legit": ["the economy grew steadily this year"],
//!     "Fake": ["aliens stole the election with secret lasers"]
//! }
//! ```
//!
//! The loader flattens that shape into a sequence of
//! [`LabeledDocument`] values for [`NaiveBayesClassifier::train`]. Label
//! order in the flattened sequence is unspecified (training is
//! order-insensitive); document order within one label is preserved.
//!
//! [`NaiveBayesClassifier::train`]: crate::classifier::NaiveBayesClassifier::train

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::classifier::LabeledDocument;
use crate::error::Result;

/// Load training documents from a JSON corpus file.
///
/// # Errors
///
/// A missing or unreadable file surfaces as an I/O error; a file that is
/// not JSON of the expected shape surfaces as a JSON error. A corpus that
/// parses but contains no documents is not an error here: the classifier
/// rejects it at training time.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledDocument>> {
    let content = fs::read_to_string(path)?;
    parse_corpus(&content)
}

/// Parse training documents from an in-memory JSON corpus string.
pub fn parse_corpus(content: &str) -> Result<Vec<LabeledDocument>> {
    let corpus: HashMap<String, Vec<String>> = serde_json::from_str(content)?;

    let mut documents = Vec::new();
    for (label, texts) in corpus {
        for text in texts {
            documents.push(LabeledDocument::new(text, label.clone()));
        }
    }

    Ok(documents)
}
