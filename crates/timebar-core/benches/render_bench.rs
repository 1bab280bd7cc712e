// File: crates/timebar-core/benches/render_bench.rs
// Summary: Layout + SVG render cost for quarterly series of realistic and inflated size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use timebar_core::{normalize, BarChart, ChartOptions, Record, Viewport};

fn quarterly(n: usize) -> Vec<Record> {
    let raw: Vec<(String, f64)> = (0..n)
        .map(|i| {
            let year = 1947 + (i / 4) as i32;
            let month = 1 + 3 * (i % 4) as u32;
            (format!("{year:04}-{month:02}-01"), 243.1 + (i as f64 * 0.01).sin() * 10.0 + i as f64 * 70.0)
        })
        .collect();
    normalize(raw.iter().map(|(l, v)| (l.as_str(), *v))).expect("valid series")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_and_svg");
    for &n in &[275usize, 5_000usize] {
        let records = quarterly(n);
        group.bench_function(format!("quarters_{n}"), |b| {
            b.iter(|| {
                let chart = BarChart::new(&records, Viewport::new(1024.0, 640.0), ChartOptions::default())
                    .expect("layout");
                black_box(chart.to_svg());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
