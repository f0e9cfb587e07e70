use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use span_paint::{Compositor, Glyph, PixmapLayout, PixmapMut, PlotterConfig};

const WIDTH: usize = 1024;

fn configs() -> [(&'static str, PlotterConfig); 2] {
    [
        ("specialized", PlotterConfig::all()),
        ("generic", PlotterConfig::generic_only()),
    ]
}

fn bench_solid_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("solid_fill_rgb");
    for (name, cfg) in configs() {
        for (da, alpha) in [(false, 255u8), (true, 255), (true, 128)] {
            let color = [30u8, 60, 90, alpha];
            let painter = cfg.solid_color_painter(3, &color, da).unwrap();
            let mut dst = vec![0u8; WIDTH * 4];
            let id = BenchmarkId::new(name, format!("da={da} alpha={alpha}"));
            group.bench_function(id, |b| b.iter(|| painter.paint(black_box(&mut dst), WIDTH)));
        }
    }
    group.finish();
}

fn bench_span_over(c: &mut Criterion) {
    let src: Vec<u8> = (0..WIDTH * 4).map(|i| (i * 13) as u8).collect();
    let mut group = c.benchmark_group("span_over_rgba");
    for (name, cfg) in configs() {
        for alpha in [255u8, 128] {
            let painter = cfg.span_painter(true, true, 3, alpha).unwrap();
            let mut dst = vec![200u8; WIDTH * 4];
            let id = BenchmarkId::new(name, format!("alpha={alpha}"));
            group.bench_function(id, |b| {
                b.iter(|| painter.paint(black_box(&mut dst), black_box(&src), WIDTH))
            });
        }
    }
    group.finish();
}

fn bench_span_mask(c: &mut Criterion) {
    let src: Vec<u8> = (0..WIDTH * 4).map(|i| (i * 13) as u8).collect();
    let mask: Vec<u8> = (0..WIDTH).map(|i| (i * 3) as u8).collect();
    let mut group = c.benchmark_group("span_mask_cmyk");
    for (name, cfg) in configs() {
        let painter = cfg.span_mask_painter(false, false, 4).unwrap();
        let mut dst = vec![200u8; WIDTH * 4];
        group.bench_function(name, |b| {
            b.iter(|| painter.paint(black_box(&mut dst), &src, &mask, WIDTH))
        });
    }
    group.finish();
}

fn bench_span_color(c: &mut Criterion) {
    let mask: Vec<u8> = (0..WIDTH).map(|i| (i * 7) as u8).collect();
    let color = [10u8, 200, 120, 255];
    let mut group = c.benchmark_group("span_color_rgba");
    for (name, cfg) in configs() {
        let painter = cfg.span_color_painter(3, true, &color).unwrap();
        let mut dst = vec![0u8; WIDTH * 4];
        group.bench_function(name, |b| b.iter(|| painter.paint(black_box(&mut dst), &mask, WIDTH)));
    }
    group.finish();
}

fn bench_glyph(c: &mut Criterion) {
    // 64x64 glyph: each row is transparent(8), intermediate(4), solid(40, eol).
    let mut data = Vec::new();
    let mut rows = Vec::new();
    for _ in 0..64 {
        rows.push(Some(data.len()));
        data.extend_from_slice(&[(7 << 2) | 1, (3 << 3) | 3, 64, 128, 192, 255]);
        data.extend_from_slice(&[1 << 2, (7 << 3) | 4 | 2]);
    }
    let glyph = Glyph::new(64, 64, rows, data).unwrap();
    let layout = PixmapLayout::new(0, 0, 64, 64, 3, false);
    let mut buf = vec![255u8; 64 * 64 * 3];
    let compositor = Compositor::default();
    c.bench_function("paint_glyph_rgb_alpha", |b| {
        b.iter(|| {
            let mut dst = PixmapMut::new(layout, &mut buf).unwrap();
            compositor
                .paint_glyph(&[0, 0, 0, 180], &mut dst, 0, 0, black_box(&glyph), 64, 64, 0, 0)
                .unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_solid_fill,
    bench_span_over,
    bench_span_mask,
    bench_span_color,
    bench_glyph
);
criterion_main!(benches);
