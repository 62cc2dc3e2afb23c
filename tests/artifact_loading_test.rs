//! Integration tests for artifact resolution, loading, and round-trips.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use smish::error::{Result, SmishError};
use smish::model::{
    ArtifactStore, MODEL_FILE, SpamClassifier, VECTORIZER_FILE, save_artifacts,
};
use smish::train::{self, CorpusRecord, TrainOptions};

fn sample_corpus() -> Vec<CorpusRecord> {
    let spam = [
        "WINNER! Claim your free cash prize now",
        "Congratulations, you won! Click to claim your prize",
        "URGENT: free cash award waiting, claim today",
        "Win 1000 cash instantly, text CLAIM now",
        "Free prize draw! Click the link to win cash",
        "Your number won 2000! Claim your winnings now",
    ];
    let ham = [
        "Are we still meeting for lunch tomorrow?",
        "The meeting moved to conference room B at 3pm",
        "Can you pick up milk on your way home?",
        "Running late, see you in ten minutes",
        "Thanks for dinner last night",
        "See you at the gym after work",
    ];

    spam.iter()
        .map(|&text| CorpusRecord {
            label: 1,
            text: text.to_string(),
        })
        .chain(ham.iter().map(|&text| CorpusRecord {
            label: 0,
            text: text.to_string(),
        }))
        .collect()
}

#[test]
fn test_no_candidate_directory_reports_every_path() {
    let store = ArtifactStore::with_candidates(vec![
        PathBuf::from("/definitely/not/here"),
        PathBuf::from("/also/not/here"),
    ]);

    match store.load() {
        Err(SmishError::ArtifactsNotFound { tried }) => {
            assert_eq!(tried.len(), 2);
        }
        other => panic!("expected ArtifactsNotFound, got {other:?}"),
    }
}

#[test]
fn test_directory_with_single_artifact_fails() -> Result<()> {
    let trained = train::train(&sample_corpus(), &TrainOptions::default())?;

    let dir = TempDir::new().unwrap();
    save_artifacts(
        dir.path(),
        &trained.vectorizer,
        &trained.model,
        &trained.metadata,
    )?;
    fs::remove_file(dir.path().join(MODEL_FILE))?;

    let store = ArtifactStore::with_candidates(vec![dir.path().to_path_buf()]);
    match store.load() {
        Err(SmishError::ArtifactsNotFound { tried }) => {
            assert_eq!(tried, vec![dir.path().join(MODEL_FILE)]);
        }
        other => panic!("expected ArtifactsNotFound, got {other:?}"),
    }

    Ok(())
}

#[test]
fn test_first_existing_directory_wins() -> Result<()> {
    let trained = train::train(&sample_corpus(), &TrainOptions::default())?;

    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    save_artifacts(
        second.path(),
        &trained.vectorizer,
        &trained.model,
        &trained.metadata,
    )?;

    // The first candidate does not exist on disk, the second does.
    let store = ArtifactStore::with_candidates(vec![
        first.path().join("missing"),
        second.path().to_path_buf(),
    ]);
    assert_eq!(store.resolve()?, second.path());

    Ok(())
}

#[test]
fn test_save_load_round_trip_preserves_predictions() -> Result<()> {
    let trained = train::train(&sample_corpus(), &TrainOptions::default())?;
    let original = SpamClassifier::new(trained.vectorizer.clone(), trained.model.clone())?;

    let dir = TempDir::new().unwrap();
    save_artifacts(
        dir.path(),
        &trained.vectorizer,
        &trained.model,
        &trained.metadata,
    )?;

    let store = ArtifactStore::with_candidates(vec![dir.path().to_path_buf()]);
    let (vectorizer, model) = store.load()?;
    let reloaded = SpamClassifier::new(vectorizer, model)?;

    for text in [
        "WINNER! Claim your free prize",
        "see you at lunch tomorrow",
        "",
    ] {
        let a = original.predict(text)?;
        let b = reloaded.predict(text)?;
        assert_eq!(a.prediction, b.prediction);
        assert!((a.confidence.spam - b.confidence.spam).abs() < 1e-12);
    }

    Ok(())
}

#[test]
fn test_metadata_round_trip() -> Result<()> {
    let trained = train::train(&sample_corpus(), &TrainOptions::default())?;

    let dir = TempDir::new().unwrap();
    save_artifacts(
        dir.path(),
        &trained.vectorizer,
        &trained.model,
        &trained.metadata,
    )?;

    let store = ArtifactStore::with_candidates(vec![dir.path().to_path_buf()]);
    let metadata = store.load_metadata().expect("metadata should load");
    assert_eq!(metadata.features, trained.vectorizer.vocabulary_size());
    assert!(metadata.validation_metrics.contains_key("accuracy"));

    Ok(())
}

#[test]
fn test_corrupt_artifact_is_fatal() -> Result<()> {
    let trained = train::train(&sample_corpus(), &TrainOptions::default())?;

    let dir = TempDir::new().unwrap();
    save_artifacts(
        dir.path(),
        &trained.vectorizer,
        &trained.model,
        &trained.metadata,
    )?;
    fs::write(dir.path().join(VECTORIZER_FILE), b"not a real artifact")?;

    let store = ArtifactStore::with_candidates(vec![dir.path().to_path_buf()]);
    match store.load() {
        Err(error @ SmishError::ArtifactCorrupt { .. }) => {
            assert!(error.is_fatal_at_startup());
        }
        other => panic!("expected ArtifactCorrupt, got {other:?}"),
    }

    Ok(())
}

#[test]
fn test_mismatched_pair_is_rejected_at_load() -> Result<()> {
    use smish::model::MultinomialNb;

    let trained = train::train(&sample_corpus(), &TrainOptions::default())?;

    // A classifier fitted on a different (two-feature) space.
    let foreign_model = MultinomialNb::fit(
        &[vec![1.0, 0.0], vec![0.0, 1.0]],
        &[1, 0],
        1.0,
    )
    .unwrap();

    let dir = TempDir::new().unwrap();
    save_artifacts(
        dir.path(),
        &trained.vectorizer,
        &foreign_model,
        &trained.metadata,
    )?;

    let store = ArtifactStore::with_candidates(vec![dir.path().to_path_buf()]);
    match store.load() {
        Err(SmishError::ArtifactCorrupt { reason, .. }) => {
            assert!(reason.contains("mismatch"));
        }
        other => panic!("expected ArtifactCorrupt, got {other:?}"),
    }

    Ok(())
}
