//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{OutputFormat, SmishArgs};
use crate::error::Result;
use crate::model::Prediction;
use crate::train::EvalMetrics;

/// Result structure for training runs.
#[derive(Debug, Serialize)]
pub struct TrainSummary {
    pub examples: usize,
    pub features: usize,
    pub accuracy: f64,
    pub precision: f64,
    pub test_examples: usize,
    pub output_dir: String,
}

impl TrainSummary {
    pub fn new(
        examples: usize,
        features: usize,
        metrics: &EvalMetrics,
        output_dir: String,
    ) -> Self {
        TrainSummary {
            examples,
            features,
            accuracy: metrics.accuracy,
            precision: metrics.precision,
            test_examples: metrics.test_examples,
            output_dir,
        }
    }
}

/// Result structure for warmup runs.
#[derive(Debug, Serialize)]
pub struct WarmupSummary {
    pub prediction: String,
    pub features: usize,
}

/// Print a value as JSON, pretty or compact per the CLI flags.
pub fn print_json<T: Serialize>(value: &T, args: &SmishArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

/// Print a prediction in the selected format. JSON output is the line
/// format downstream tooling parses; human output is a short block.
pub fn print_prediction(prediction: &Prediction, args: &SmishArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(prediction, args),
        OutputFormat::Human => {
            println!("prediction:  {}", prediction.prediction);
            println!(
                "confidence:  ham {} / spam {}",
                prediction.confidence_percentage.ham, prediction.confidence_percentage.spam
            );
            println!("normalized:  {:?}", prediction.transformed_text);
            Ok(())
        }
    }
}

/// Print a training summary in the selected format.
pub fn print_train_summary(summary: &TrainSummary, args: &SmishArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(summary, args),
        OutputFormat::Human => {
            println!(
                "trained on {} examples ({} features)",
                summary.examples, summary.features
            );
            println!(
                "hold-out accuracy {:.4}, precision {:.4} ({} examples)",
                summary.accuracy, summary.precision, summary.test_examples
            );
            println!("artifacts written to {}", summary.output_dir);
            Ok(())
        }
    }
}

/// Print a warmup summary in the selected format.
pub fn print_warmup_summary(summary: &WarmupSummary, args: &SmishArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(summary, args),
        OutputFormat::Human => {
            println!(
                "warmup successful: {} features loaded, probe prediction {:?}",
                summary.features, summary.prediction
            );
            Ok(())
        }
    }
}
