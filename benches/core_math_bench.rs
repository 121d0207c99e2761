use criterion::{Criterion, criterion_group, criterion_main};
use rankbar::api::{ChartConfig, ChartState};
use rankbar::core::{BandScale, LinearScale};
use rankbar::data::{Dataset, MalformedRowPolicy, Record, load_csv_reader, rank};
use rankbar::render::NullRenderer;
use std::hint::black_box;

fn generated_dataset(len: usize) -> Dataset {
    (0..len)
        .map(|i| {
            let count = ((i * 7_919) % 10_007) as f64;
            Record::new(format!("reason {i}"), count).expect("valid generated record")
        })
        .collect()
}

fn bench_linear_scale_ticks(c: &mut Criterion) {
    let scale = LinearScale::for_counts(10_000.0, 1_520.0).expect("valid scale");

    c.bench_function("linear_scale_ticks", |b| {
        b.iter(|| {
            let _ = scale.map(black_box(4_321.123));
            let _ = scale.ticks(black_box(10));
        })
    });
}

fn bench_rank_10k(c: &mut Criterion) {
    let dataset = generated_dataset(10_000);

    c.bench_function("rank_10k", |b| {
        b.iter(|| {
            let _ = rank(black_box(&dataset));
        })
    });
}

fn bench_band_scale_10k(c: &mut Criterion) {
    let view = rank(&generated_dataset(10_000));

    c.bench_function("band_scale_10k", |b| {
        b.iter(|| {
            let scale = BandScale::with_padding(black_box(&view).reasons(), 0.0, 1_000.0, 0.2)
                .expect("valid band scale");
            let _ = scale.label_at(black_box(512.0));
        })
    });
}

fn bench_csv_load_5k(c: &mut Criterion) {
    let mut text = String::from("reason,Count\n");
    for i in 0..5_000 {
        text.push_str(&format!("reason {i},{}\n", (i * 31) % 977));
    }

    c.bench_function("csv_load_5k", |b| {
        b.iter(|| {
            let _ = load_csv_reader(black_box(text.as_bytes()), "bench", MalformedRowPolicy::Skip)
                .expect("load should succeed");
        })
    });
}

fn bench_expand_transition_1k(c: &mut Criterion) {
    let dataset = generated_dataset(1_000);

    c.bench_function("expand_transition_1k", |b| {
        b.iter(|| {
            let mut chart = ChartState::new(NullRenderer::default(), ChartConfig::default())
                .expect("chart init");
            chart.load(dataset.clone()).expect("load");
            chart.expand().expect("expand");
            while chart.advance(black_box(16.0)).expect("advance") {}
        })
    });
}

fn bench_snapshot_json_2k(c: &mut Criterion) {
    let mut chart =
        ChartState::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");
    chart.load(generated_dataset(2_000)).expect("load");
    chart.expand().expect("expand");
    chart.finish_transition().expect("finish");

    c.bench_function("snapshot_json_2k", |b| {
        b.iter(|| {
            let _ = chart
                .snapshot_json_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_ticks,
    bench_rank_10k,
    bench_band_scale_10k,
    bench_csv_load_5k,
    bench_expand_transition_1k,
    bench_snapshot_json_2k
);
criterion_main!(benches);
