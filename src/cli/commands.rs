//! Command implementations for the smish CLI.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::analysis::Normalizer;
use crate::cli::args::{
    Command, PredictArgs, ServeArgs, SmishArgs, TrainArgs, WarmupArgs,
};
use crate::cli::output::{
    TrainSummary, WarmupSummary, print_prediction, print_train_summary, print_warmup_summary,
};
use crate::error::{Result, SmishError};
use crate::model::{ArtifactStore, ClassifierCell, SpamClassifier, save_artifacts};
use crate::server::{self, AppState};
use crate::train::{self, TrainOptions};

/// Message used by warmup and startup probes.
const WARMUP_MESSAGE: &str = "This is a warmup test message";

/// Execute a CLI command.
pub fn execute_command(args: SmishArgs) -> Result<()> {
    match &args.command {
        Command::Serve(serve_args) => serve(serve_args.clone(), &args),
        Command::Predict(predict_args) => predict(predict_args.clone(), &args),
        Command::Train(train_args) => train_model(train_args.clone(), &args),
        Command::Warmup(warmup_args) => warmup(warmup_args.clone(), &args),
    }
}

/// Load the artifact pair and build a classifier.
fn load_classifier(models_dir: Option<std::path::PathBuf>) -> Result<SpamClassifier> {
    let store = ArtifactStore::new(models_dir);
    let (vectorizer, model) = store.load()?;
    SpamClassifier::new(vectorizer, model)
}

/// Run the HTTP service.
///
/// Startup order is fixed: verify the normalizer, load the artifacts
/// (fatal on failure), then bind the socket. No request can be dispatched
/// before loading completes.
fn serve(args: ServeArgs, cli_args: &SmishArgs) -> Result<()> {
    Normalizer::new().verify()?;

    let cell = ClassifierCell::empty();
    cell.fill(load_classifier(args.models_dir)?)?;

    if cli_args.verbosity() > 0 {
        println!("SMS spam detection service ready");
    }

    let addr = SocketAddr::new(args.host, args.port);
    let state = Arc::new(AppState::new(cell));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::run(addr, state))
}

/// Classify one message and print the result.
fn predict(args: PredictArgs, cli_args: &SmishArgs) -> Result<()> {
    let text = args.text.trim();
    if text.is_empty() {
        return Err(SmishError::invalid_input("no text provided"));
    }

    let classifier = load_classifier(args.models_dir)?;
    let prediction = classifier.predict(text)?;

    print_prediction(&prediction, cli_args)
}

/// Train artifacts from a labeled corpus and write them out.
fn train_model(args: TrainArgs, cli_args: &SmishArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("loading corpus from {}", args.corpus.display());
    }
    let records = train::load_corpus(&args.corpus)?;

    let options = TrainOptions {
        max_features: args.max_features,
        seed: args.seed,
        ..TrainOptions::default()
    };
    let trained = train::train(&records, &options)?;

    save_artifacts(
        &args.output_dir,
        &trained.vectorizer,
        &trained.model,
        &trained.metadata,
    )?;

    let summary = TrainSummary::new(
        records.len(),
        trained.vectorizer.vocabulary_size(),
        &trained.metrics,
        args.output_dir.display().to_string(),
    );
    print_train_summary(&summary, cli_args)
}

/// Load the artifacts and run one probe prediction. Exits nonzero (via
/// the error path in main) if anything is missing, so container startup
/// scripts can gate on it.
fn warmup(args: WarmupArgs, cli_args: &SmishArgs) -> Result<()> {
    Normalizer::new().verify()?;

    let classifier = load_classifier(args.models_dir)?;
    let prediction = classifier.predict(WARMUP_MESSAGE)?;

    let summary = WarmupSummary {
        prediction: prediction.prediction.to_string(),
        features: classifier.feature_count(),
    };
    print_warmup_summary(&summary, cli_args)
}
