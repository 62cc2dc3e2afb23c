//! Criterion benchmarks for the smish classification pipeline.
//!
//! Covers the two hot paths:
//! - Text normalization (tokenize, filter, stem)
//! - End-to-end prediction on a trained model

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use smish::analysis::Normalizer;
use smish::model::SpamClassifier;
use smish::train::{self, CorpusRecord, TrainOptions};

const MESSAGES: &[&str] = &[
    "Congratulations! You have won $1000. Click here to claim now!",
    "Meeting at 3pm in conference room B",
    "Free entry in 2 a wkly comp to win FA Cup final tkts",
    "I'll call you when I get home from work tonight",
    "URGENT! Your mobile number has won a guaranteed cash prize",
];

fn training_corpus() -> Vec<CorpusRecord> {
    let spam = [
        "Congratulations! You have won a free prize, claim it now",
        "URGENT! Click here to claim your cash prize of $2000",
        "WINNER!! Click to claim your free cash award today",
        "Free entry! Win 1000 cash now, text WIN to claim",
        "Your number won 2000 in our prize draw, click to claim",
        "Claim your free ringtone now! Click here",
    ];
    let ham = [
        "Are we still meeting for lunch tomorrow?",
        "The meeting moved to conference room B at 3pm",
        "Can you pick up milk on your way home?",
        "Running late, see you in ten minutes",
        "The conference call is at 3pm in room two",
        "See you at the gym after work today",
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

fn bench_normalize(c: &mut Criterion) {
    let normalizer = Normalizer::new();

    let mut group = c.benchmark_group("normalize");
    group.throughput(Throughput::Elements(MESSAGES.len() as u64));
    group.bench_function("sms_messages", |b| {
        b.iter(|| {
            for message in MESSAGES {
                black_box(normalizer.normalize(black_box(message)).unwrap());
            }
        })
    });
    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let trained = train::train(&training_corpus(), &TrainOptions::default()).unwrap();
    let classifier = SpamClassifier::new(trained.vectorizer, trained.model).unwrap();

    let mut group = c.benchmark_group("predict");
    group.throughput(Throughput::Elements(MESSAGES.len() as u64));
    group.bench_function("sms_messages", |b| {
        b.iter(|| {
            for message in MESSAGES {
                black_box(classifier.predict(black_box(message)).unwrap());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_predict);
criterion_main!(benches);
