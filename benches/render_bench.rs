//! Benchmarks for view rendering
//!
//! Run with: cargo bench

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;
use waste_tracker::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

/// Entries spread over ten days, a tenth of them landing on today
fn create_test_store(count: usize) -> EntryStore {
    let mut store = EntryStore::new();
    for i in 0..count {
        let date = today() - Duration::days((i % 10) as i64);
        store.append(WasteEntry::new(
            i.to_string(),
            format!("ITEM <{}> & CO", i),
            date,
            i as i64 * 1000,
        ));
    }
    store
}

fn renderer() -> ViewRenderer {
    let clock = FixedClock::at(today().and_hms_opt(12, 0, 0).unwrap());
    ViewRenderer::new(Arc::new(HtmlMarkup), Arc::new(clock))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let renderer = renderer();

    for size in [100, 1000, 10000] {
        let store = create_test_store(size);
        let mut surfaces = MemorySurfaces::all();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("today_{}", size), |b| {
            b.iter(|| renderer.render_today(black_box(&store), &mut surfaces).unwrap())
        });

        group.bench_function(format!("overview_{}", size), |b| {
            b.iter(|| renderer.render_overview(black_box(&store), &mut surfaces).unwrap())
        });
    }

    group.finish();
}

fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    group.bench_function("replace_all_10000", |b| {
        let entries: Vec<WasteEntry> = create_test_store(10000).iter().cloned().collect();
        b.iter(|| {
            let mut store = EntryStore::new();
            store.replace_all(black_box(entries.clone()));
            store
        })
    });

    group.bench_function("escape_html", |b| {
        let text = "<script>alert('x')</script> & \"quoted\"".repeat(20);
        b.iter(|| escape_html(black_box(&text)))
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_store);
criterion_main!(benches);
