use std::sync::Mutex;

use telegraph_compression::CompressionPipeline;
use telegraph_core::annotation::{PosTag, Sentence, Token};
use telegraph_core::errors::{AnnotationError, CountingError, TelegraphError, TelegraphResult};
use telegraph_core::policy::RemovalPolicy;
use telegraph_core::traits::{IAnnotator, ITokenCounter};

/// Annotator returning the same canned sentences for any input.
struct CannedAnnotator {
    sentences: Vec<Sentence>,
}

impl IAnnotator for CannedAnnotator {
    fn annotate(&self, _text: &str) -> TelegraphResult<Vec<Sentence>> {
        Ok(self.sentences.clone())
    }
}

struct FailingAnnotator;
impl IAnnotator for FailingAnnotator {
    fn annotate(&self, _text: &str) -> TelegraphResult<Vec<Sentence>> {
        Err(AnnotationError::EmptyDocument.into())
    }
}

/// Deterministic counter: one token per whitespace-separated word. Records
/// the model identifiers it was asked for.
struct WordCounter {
    models_seen: Mutex<Vec<String>>,
}

impl WordCounter {
    fn new() -> Self {
        Self {
            models_seen: Mutex::new(Vec::new()),
        }
    }
}

impl ITokenCounter for WordCounter {
    fn count(&self, text: &str, model: &str) -> TelegraphResult<usize> {
        self.models_seen.lock().unwrap().push(model.to_string());
        Ok(text.split_whitespace().count())
    }
}

struct FailingCounter;
impl ITokenCounter for FailingCounter {
    fn count(&self, _text: &str, model: &str) -> TelegraphResult<usize> {
        Err(CountingError::UnknownModel {
            model: model.to_string(),
            reason: "no tokenizer".into(),
        }
        .into())
    }
}

fn tower_annotator() -> CannedAnnotator {
    // "The Tower is tall ." → "Tower tall."
    CannedAnnotator {
        sentences: vec![Sentence::new(vec![
            Token::new("The", "the", PosTag::Det),
            Token::new("Tower", "Tower", PosTag::Propn),
            Token::new("is", "be", PosTag::Aux),
            Token::new("tall", "tall", PosTag::Adj),
            Token::new(".", ".", PosTag::Punct),
        ])],
    }
}

#[test]
fn pipeline_builds_a_full_report() {
    let annotator = tower_annotator();
    let counter = WordCounter::new();
    let pipeline = CompressionPipeline::new(&annotator, &counter);

    let report = pipeline.run("The Tower is tall .").unwrap();

    assert_eq!(report.original_text, "The Tower is tall .");
    assert_eq!(report.compressed_text, "Tower tall.");
    assert_eq!(report.model, "gpt-4");
    // Word counter: 5 words in, "Tower tall." splits to 2.
    assert_eq!(report.original_tokens, 5);
    assert_eq!(report.compressed_tokens, 2);
    assert!((report.reduction_pct - 60.0).abs() < f64::EPSILON);
}

#[test]
fn zero_token_original_is_rejected_before_reporting() {
    let annotator = CannedAnnotator { sentences: vec![] };
    let counter = WordCounter::new();
    let pipeline = CompressionPipeline::new(&annotator, &counter);

    let err = pipeline.run("").unwrap_err();
    assert!(matches!(err, TelegraphError::EmptyOriginal));
}

#[test]
fn annotation_failure_propagates_unrecovered() {
    let counter = WordCounter::new();
    let pipeline = CompressionPipeline::new(&FailingAnnotator, &counter);

    let err = pipeline.run("anything").unwrap_err();
    assert!(matches!(
        err,
        TelegraphError::AnnotationError(AnnotationError::EmptyDocument)
    ));
    // The counter was never consulted.
    assert!(counter.models_seen.lock().unwrap().is_empty());
}

#[test]
fn counting_failure_propagates_unrecovered() {
    let annotator = tower_annotator();
    let pipeline = CompressionPipeline::new(&annotator, &FailingCounter);

    let err = pipeline.run("The Tower is tall .").unwrap_err();
    assert!(matches!(err, TelegraphError::CountingError(_)));
}

#[test]
fn the_model_identifier_reaches_the_counter_and_the_report() {
    let annotator = tower_annotator();
    let counter = WordCounter::new();
    let pipeline = CompressionPipeline::new(&annotator, &counter).with_model("claude-3");

    let report = pipeline.run("The Tower is tall .").unwrap();

    assert_eq!(report.model, "claude-3");
    let seen = counter.models_seen.lock().unwrap();
    // Both texts counted under the same identifier.
    assert_eq!(seen.as_slice(), ["claude-3", "claude-3"]);
}

#[test]
fn a_custom_policy_applies_to_the_run() {
    let annotator = tower_annotator();
    let counter = WordCounter::new();
    let pipeline =
        CompressionPipeline::new(&annotator, &counter).with_policy(RemovalPolicy::empty());

    let report = pipeline.run("The Tower is tall .").unwrap();

    // Nothing dropped but punctuation; lemmas still replace surface forms.
    assert_eq!(report.compressed_text, "the Tower be tall.");
}

#[test]
fn all_filler_input_still_reports_when_the_original_counts() {
    let annotator = CannedAnnotator {
        sentences: vec![Sentence::new(vec![
            Token::new("It", "it", PosTag::Pron),
            Token::new("was", "be", PosTag::Aux),
        ])],
    };
    let counter = WordCounter::new();
    let pipeline = CompressionPipeline::new(&annotator, &counter);

    let report = pipeline.run("It was").unwrap();

    assert_eq!(report.compressed_text, ".");
    assert_eq!(report.original_tokens, 2);
    // "." splits to one word under the word counter.
    assert_eq!(report.compressed_tokens, 1);
    assert!(report.reduction_pct > 0.0);
}
