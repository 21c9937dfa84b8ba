//! Command implementations for the Veracity CLI.

use crate::classifier::NaiveBayesClassifier;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::load_corpus;
use crate::error::{Result, VeracityError};
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

/// Execute a CLI command.
pub fn execute_command(args: VeracityArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify_document(classify_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Load a corpus file and train a classifier on it.
fn train_from_corpus(corpus_file: &Path, cli_args: &VeracityArgs) -> Result<NaiveBayesClassifier> {
    if cli_args.verbosity() > 1 {
        println!("Loading corpus from: {}", corpus_file.display());
    }

    let documents = load_corpus(corpus_file)?;
    if documents.is_empty() {
        return Err(VeracityError::corpus(
            "corpus contains no documents; check the corpus file",
        ));
    }

    let mut classifier = NaiveBayesClassifier::new()?;
    let start_time = Instant::now();
    classifier.train(&documents)?;

    if cli_args.verbosity() > 1 {
        println!(
            "Trained on {} documents ({} labels, {} distinct terms) in {:.2?}",
            classifier.total_documents(),
            classifier.labels().len(),
            classifier.vocabulary_size(),
            start_time.elapsed()
        );
    }

    Ok(classifier)
}

/// Classify a document against a corpus-trained model.
fn classify_document(args: ClassifyArgs, cli_args: &VeracityArgs) -> Result<()> {
    let classifier = train_from_corpus(&args.corpus_file, cli_args)?;

    let text = read_document_text(&args)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(VeracityError::invalid_argument(
            "document text is empty; provide a document to classify",
        ));
    }

    let start_time = Instant::now();
    let prediction = classifier.predict(text)?;
    let duration_ms = start_time.elapsed().as_millis() as u64;

    let log_scores: BTreeMap<String, f64> = prediction.log_scores.into_iter().collect();

    output_result(
        "Classification complete",
        &ClassificationResult {
            label: prediction.label,
            log_scores,
            duration_ms,
        },
        cli_args,
    )
}

/// Read the document to classify from the argument, a file, or stdin.
fn read_document_text(args: &ClassifyArgs) -> Result<String> {
    if let Some(text) = &args.text {
        Ok(text.clone())
    } else if let Some(path) = &args.input {
        Ok(fs::read_to_string(path)?)
    } else {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

/// Show statistics for a corpus-trained model.
fn show_stats(args: StatsArgs, cli_args: &VeracityArgs) -> Result<()> {
    let classifier = train_from_corpus(&args.corpus_file, cli_args)?;

    let labels = classifier
        .labels()
        .iter()
        .map(|label| LabelStats {
            label: label.clone(),
            documents: classifier.document_count(label),
            tokens: args.detailed.then(|| classifier.class_token_total(label)),
        })
        .collect();

    output_result(
        "Model statistics",
        &ModelStats {
            total_documents: classifier.total_documents(),
            vocabulary_size: classifier.vocabulary_size(),
            labels,
        },
        cli_args,
    )
}
