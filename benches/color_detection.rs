use color_query::{interpret_color, ColorRenderer, FormatDetector, Rgb};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_detection(c: &mut Criterion) {
    let detector = FormatDetector::new();

    c.bench_function("detect_hex", |b| {
        b.iter(|| detector.detect(black_box("#ff5733")))
    });
    c.bench_function("detect_functional_rgb", |b| {
        b.iter(|| detector.detect(black_box("rgb(255, 87, 51)")))
    });
    c.bench_function("detect_bare_triple", |b| {
        b.iter(|| detector.detect(black_box("255,87,51")))
    });
    c.bench_function("detect_functional_hsl", |b| {
        b.iter(|| detector.detect(black_box("hsl(9, 100%, 60%)")))
    });
    c.bench_function("detect_unrecognized", |b| {
        b.iter(|| detector.detect(black_box("not a color")))
    });
}

fn benchmark_render(c: &mut Criterion) {
    let renderer = ColorRenderer::new();

    c.bench_function("render_representations", |b| {
        b.iter(|| renderer.render(black_box(Rgb::new(255, 87, 51))))
    });
}

fn benchmark_interpret(c: &mut Criterion) {
    // Full path including normalization and detector construction
    c.bench_function("interpret_color", |b| {
        b.iter(|| interpret_color(black_box(" RGB(255, 87, 51) ")))
    });
}

criterion_group!(benches, benchmark_detection, benchmark_render, benchmark_interpret);
criterion_main!(benches);
