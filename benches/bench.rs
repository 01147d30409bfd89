// Criterion benchmarks for StyleMatch

use async_trait::async_trait;
use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use stylematch::core::{extract_object, list_stores, shape_match_result, DiscoverFilter, SessionMode, StyleAdvisor, StyleSession};
use stylematch::models::AgentOutcome;
use stylematch::services::{AgentError, AgentIds, AgentInvoker, Catalog};
use stylematch::services::catalog::sample_matches;

fn ranking_payload(stores: usize) -> String {
    let entries: Vec<String> = (0..stores)
        .map(|i| {
            format!(
                r#"{{"store_name":"Store {}","match_percentage":{},"match_explanation":"Because.","shared_tags":["clean","tailored"]}}"#,
                i,
                100 - (i % 100)
            )
        })
        .collect();
    format!(
        "Here are your matches:\n```json\n{{\"ranked_stores\":[{}],\"match_summary\":\"Done.\"}}\n```",
        entries.join(",")
    )
}

fn bench_extract_object(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_object");

    for stores in [8, 100, 1000].iter() {
        let raw = Value::String(ranking_payload(*stores));
        group.bench_with_input(BenchmarkId::from_parameter(stores), &raw, |b, raw| {
            b.iter(|| extract_object(black_box(raw)));
        });
    }

    group.finish();
}

fn bench_shape_match_result(c: &mut Criterion) {
    let parsed = extract_object(&Value::String(ranking_payload(100))).unwrap();

    c.bench_function("shape_match_result_100", |b| {
        b.iter(|| shape_match_result(black_box(&parsed)));
    });
}

fn bench_list_stores(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let matches = sample_matches();
    let favorites = vec!["s1".to_string(), "s4".to_string()];

    let mut group = c.benchmark_group("list_stores");
    for filter in [DiscoverFilter::All, DiscoverFilter::Nearest, DiscoverFilter::BestMatch] {
        group.bench_with_input(BenchmarkId::from_parameter(&filter), &filter, |b, filter| {
            b.iter(|| list_stores(&catalog, &matches, &favorites, black_box(filter)));
        });
    }
    group.finish();
}

struct CannedAgent(String);

#[async_trait]
impl AgentInvoker for CannedAgent {
    async fn invoke(&self, _prompt: &str, _agent_id: &str) -> Result<AgentOutcome, AgentError> {
        Ok(AgentOutcome::with_result(self.0.clone()))
    }
}

fn bench_match_pipeline(c: &mut Criterion) {
    let advisor = StyleAdvisor::new(
        Arc::new(CannedAgent(ranking_payload(8))),
        Arc::new(Catalog::builtin()),
        AgentIds::default(),
    );

    c.bench_function("match_stores_pipeline", |b| {
        b.iter(|| {
            let session = Arc::new(Mutex::new(StyleSession::new(SessionMode::Sample)));
            tokio_test::block_on(advisor.match_stores(&session))
        });
    });
}

criterion_group!(
    benches,
    bench_extract_object,
    bench_shape_match_result,
    bench_list_stores,
    bench_match_pipeline,
);
criterion_main!(benches);
