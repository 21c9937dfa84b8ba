//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, VeracityArgs};
use crate::error::Result;

/// Result structure for document classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The chosen label.
    pub label: String,
    /// Log-score per label, keyed for stable output.
    pub log_scores: BTreeMap<String, f64>,
    /// Prediction duration in milliseconds.
    pub duration_ms: u64,
}

/// Model statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelStats {
    /// Number of training documents.
    pub total_documents: u64,
    /// Number of distinct terms across the corpus.
    pub vocabulary_size: usize,
    /// Per-label statistics, sorted by label.
    pub labels: Vec<LabelStats>,
}

/// Per-label statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct LabelStats {
    /// The label.
    pub label: String,
    /// Number of training documents bearing this label.
    pub documents: u64,
    /// Total token occurrences in this label's documents (detailed mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<u64>,
}

/// Output a result in the format requested by the CLI arguments.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &VeracityArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &VeracityArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &VeracityArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("ClassificationResult") => {
            output_classification_human(&value)
        }
        _ if std::any::type_name::<T>().contains("ModelStats") => output_model_stats_human(&value),
        _ => output_generic_human(&value),
    }
}

/// Output a classification result in human format.
fn output_classification_human(value: &serde_json::Value) -> Result<()> {
    if let Some(label) = value.get("label").and_then(|l| l.as_str()) {
        println!("Classified as: {label}");
    }

    if let Some(scores) = value.get("log_scores").and_then(|s| s.as_object()) {
        println!();
        let mut scores: Vec<(&String, f64)> = scores
            .iter()
            .map(|(label, score)| (label, score.as_f64().unwrap_or(f64::NEG_INFINITY)))
            .collect();
        // Highest score first; scores are log-likelihoods, not probabilities.
        scores.sort_by(|a, b| b.1.total_cmp(&a.1));
        for (label, score) in scores {
            println!("{label} score: {score:.4}");
        }
    }

    Ok(())
}

/// Output model statistics in human format.
fn output_model_stats_human(value: &serde_json::Value) -> Result<()> {
    if let Some(labels) = value.get("labels").and_then(|l| l.as_array()) {
        println!("Labels: {}", labels.len());
        for entry in labels {
            let label = entry.get("label").and_then(|l| l.as_str()).unwrap_or("?");
            let documents = entry.get("documents").and_then(|d| d.as_u64()).unwrap_or(0);
            match entry.get("tokens").and_then(|t| t.as_u64()) {
                Some(tokens) => {
                    println!("  {label}: {documents} document(s), {tokens} token(s)")
                }
                None => println!("  {label}: {documents} document(s)"),
            }
        }
    }

    if let Some(total) = value.get("total_documents").and_then(|t| t.as_u64()) {
        println!("Total documents: {total}");
    }
    if let Some(size) = value.get("vocabulary_size").and_then(|s| s.as_u64()) {
        println!("Vocabulary size: {size}");
    }

    Ok(())
}

/// Generic human-readable output for other types.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        for (key, val) in obj {
            println!("{key}: {val}");
        }
    } else {
        println!("{value}");
    }

    Ok(())
}
