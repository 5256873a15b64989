//! Estimator benchmarks: full pipeline and JSON decode + estimate.

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pawtrend_analysis::{ObservationStreams, TrendEstimator};
use pawtrend_core::types::{
    DiaryEntry, EmotionAnalysisRecord, HealthMetricRecord, WellnessScoreRecord,
};

const LABELS: &[&str] = &["felice", "ansioso", "triste", "giocoso", "calmo"];

fn streams(n: usize) -> ObservationStreams {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let ts = |i: usize| base + Duration::hours(i as i64);
    ObservationStreams {
        analyses: (0..n)
            .map(|i| EmotionAnalysisRecord::new(LABELS[i % LABELS.len()], (i * 7 % 100) as f64, ts(i)))
            .collect(),
        diary_entries: (0..n)
            .map(|i| DiaryEntry::new(ts(i), (i % 3 != 0).then_some((i % 10 + 1) as f64)))
            .collect(),
        health_metrics: (0..n).map(|i| HealthMetricRecord::new((i % 40) as f64)).collect(),
        wellness_scores: (0..n)
            .map(|i| WellnessScoreRecord::new((i * 3 % 100) as f64, ts(i)))
            .collect(),
    }
}

fn estimate_benchmark(c: &mut Criterion) {
    let estimator = TrendEstimator::with_defaults();
    let mut group = c.benchmark_group("estimate");
    for n in [10usize, 100, 1_000] {
        let input = streams(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| black_box(input.estimate(&estimator)));
        });
    }
    group.finish();
}

fn decode_and_estimate_benchmark(c: &mut Criterion) {
    let estimator = TrendEstimator::with_defaults();
    let json = serde_json::to_string(&streams(100)).unwrap();
    c.bench_function("decode_and_estimate_100", |b| {
        b.iter(|| {
            let input = ObservationStreams::from_json(black_box(&json)).unwrap();
            black_box(input.estimate(&estimator))
        });
    });
}

criterion_group!(benches, estimate_benchmark, decode_and_estimate_benchmark);
criterion_main!(benches);
