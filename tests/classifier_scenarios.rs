//! End-to-end scenarios for corpus loading, training, and prediction.

use std::io::Write;
use std::sync::Arc;

use veracity::classifier::{LabeledDocument, NaiveBayesClassifier};
use veracity::corpus::{load_corpus, parse_corpus};
use veracity::error::VeracityError;

const FAKE_NEWS_CORPUS: &str = r#"{
    "Legit": ["the economy grew steadily this year"],
    "Fake": ["aliens stole the election with secret lasers"]
}"#;

fn trained_on(corpus: &str) -> NaiveBayesClassifier {
    let documents = parse_corpus(corpus).unwrap();
    let mut classifier = NaiveBayesClassifier::new().unwrap();
    classifier.train(&documents).unwrap();
    classifier
}

#[test]
fn classifies_document_by_vocabulary_overlap() {
    let classifier = trained_on(FAKE_NEWS_CORPUS);

    let prediction = classifier.predict("the economy grew this year").unwrap();
    assert_eq!(prediction.label, "Legit");
    assert!(prediction.log_scores["Legit"] > prediction.log_scores["Fake"]);
}

#[test]
fn prediction_is_deterministic() {
    let classifier = trained_on(FAKE_NEWS_CORPUS);

    let first = classifier.predict("secret economy lasers").unwrap();
    let second = classifier.predict("secret economy lasers").unwrap();

    assert_eq!(first.label, second.label);
    assert_eq!(first.log_scores, second.log_scores);
}

#[test]
fn empty_input_returns_the_label_with_the_higher_prior() {
    let classifier = trained_on(
        r#"{
            "a": ["alpha beta", "gamma delta"],
            "b": ["epsilon zeta"]
        }"#,
    );

    let prediction = classifier.predict("").unwrap();
    assert_eq!(prediction.label, "a");
    assert!(prediction.log_scores["a"] > prediction.log_scores["b"]);
}

#[test]
fn smoothed_score_matches_the_closed_form() {
    // Legit: 2 tokens, Fake: 2 tokens, vocabulary: {apple, banana, cherry}.
    let classifier = trained_on(
        r#"{
            "Legit": ["apple banana"],
            "Fake": ["apple cherry"]
        }"#,
    );
    assert_eq!(classifier.vocabulary_size(), 3);
    assert_eq!(classifier.class_token_total("Legit"), 2);

    let prior = (1.0f64 / 2.0).ln();

    // "cherry" is in the vocabulary but unseen in Legit: ln(1 / (2 + 3)).
    let unseen = classifier.predict("cherry").unwrap();
    let expected = prior + (1.0f64 / 5.0).ln();
    assert!((unseen.log_scores["Legit"] - expected).abs() < 1e-12);

    // "banana" was seen once in Legit: ln(2 / (2 + 3)), strictly greater.
    let seen = classifier.predict("banana").unwrap();
    let expected = prior + (2.0f64 / 5.0).ln();
    assert!((seen.log_scores["Legit"] - expected).abs() < 1e-12);
    assert!(seen.log_scores["Legit"] > unseen.log_scores["Legit"]);

    // A token absent from the global vocabulary smooths the same way as
    // one unseen in the class.
    let unknown = classifier.predict("durian").unwrap();
    assert!((unknown.log_scores["Legit"] - unseen.log_scores["Legit"]).abs() < 1e-12);
}

#[test]
fn doubling_one_labels_documents_shifts_its_prior_by_ln2() {
    let before = trained_on(r#"{"a": ["alpha beta"], "b": ["gamma delta"]}"#);
    let after = trained_on(r#"{"a": ["alpha beta", "alpha beta"], "b": ["gamma delta"]}"#);

    // Empty input isolates the priors from the token terms.
    let before = before.predict("").unwrap();
    let after = after.predict("").unwrap();

    let margin_before = before.log_scores["a"] - before.log_scores["b"];
    let margin_after = after.log_scores["a"] - after.log_scores["b"];
    assert!((margin_after - margin_before - 2.0f64.ln()).abs() < 1e-12);
}

#[test]
fn trained_model_is_shareable_across_threads() {
    let classifier = Arc::new(trained_on(FAKE_NEWS_CORPUS));

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let classifier = Arc::clone(&classifier);
            scope.spawn(move || {
                let prediction = classifier.predict("the economy grew this year").unwrap();
                assert_eq!(prediction.label, "Legit");
            });
        }
    });
}

#[test]
fn untrained_and_empty_corpus_contracts() {
    let classifier = NaiveBayesClassifier::new().unwrap();
    assert!(matches!(
        classifier.predict("anything"),
        Err(VeracityError::UntrainedModel { .. })
    ));

    let mut classifier = NaiveBayesClassifier::new().unwrap();
    assert!(matches!(
        classifier.train(&[]),
        Err(VeracityError::EmptyCorpus { .. })
    ));
}

#[test]
fn loads_corpus_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FAKE_NEWS_CORPUS.as_bytes()).unwrap();

    let documents = load_corpus(file.path()).unwrap();
    assert_eq!(documents.len(), 2);
    assert!(documents.iter().any(|d| d.label == "Legit"));
    assert!(documents.iter().any(|d| d.label == "Fake"));

    let mut classifier = NaiveBayesClassifier::new().unwrap();
    classifier.train(&documents).unwrap();
    assert_eq!(classifier.labels(), vec!["Fake", "Legit"]);
}

#[test]
fn corpus_loading_failures_are_typed() {
    assert!(matches!(
        load_corpus("/no/such/corpus.json"),
        Err(VeracityError::Io(_))
    ));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"Legit\": 42}").unwrap();
    assert!(matches!(
        load_corpus(file.path()),
        Err(VeracityError::Json(_))
    ));
}

#[test]
fn training_order_does_not_change_the_model() {
    let documents = vec![
        LabeledDocument::new("apple banana apple", "a"),
        LabeledDocument::new("cherry banana", "b"),
        LabeledDocument::new("banana date", "a"),
    ];
    let mut reversed = documents.clone();
    reversed.reverse();

    let mut forward = NaiveBayesClassifier::new().unwrap();
    forward.train(&documents).unwrap();
    let mut backward = NaiveBayesClassifier::new().unwrap();
    backward.train(&reversed).unwrap();

    for text in ["apple", "banana date", "unseen words"] {
        let a = forward.predict(text).unwrap();
        let b = backward.predict(text).unwrap();
        assert_eq!(a.label, b.label);
        assert_eq!(a.log_scores, b.log_scores);
    }
}
