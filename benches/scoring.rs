//! Scoring benchmark: raw model score → risk percent and insight tier.

use aurora_console::risk::{assess, risk_percent, Insight, ModelMode, TaggedScore};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_risk_percent(c: &mut Criterion) {
    c.bench_function("risk_percent_unsupervised", |b| {
        b.iter(|| risk_percent(ModelMode::Unsupervised, black_box(Some(0.12))))
    });
    c.bench_function("risk_percent_supervised", |b| {
        b.iter(|| risk_percent(ModelMode::Supervised, black_box(Some(0.73))))
    });
}

fn bench_insight_table(c: &mut Criterion) {
    c.bench_function("insight_derive", |b| {
        b.iter(|| Insight::derive(black_box(Some(false)), black_box(45)))
    });
}

fn bench_assess_sweep(c: &mut Criterion) {
    let scores: Vec<f64> = (0..1000).map(|i| -0.5 + i as f64 * 0.001).collect();
    c.bench_function("assess_1000_scores", |b| {
        b.iter(|| {
            for s in &scores {
                let score = TaggedScore::Unsupervised(*s);
                black_box(assess(Some(black_box(score)), Some(false)));
            }
        })
    });
}

criterion_group!(benches, bench_risk_percent, bench_insight_table, bench_assess_sweep);
criterion_main!(benches);
