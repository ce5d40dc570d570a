use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use pixelcraft_core::{BlitOptions, Color, Surface};

const SIZE: u32 = 256;

fn gradient(width: u32, height: u32) -> Surface {
    let mut s = Surface::new(width, height).unwrap();
    s.passthru(|x, y, _| Color::from_i32_channels(x, y, x ^ y, 255));
    s
}

fn bench_blend(c: &mut Criterion) {
    let mut group = c.benchmark_group("blend");
    group.throughput(Throughput::Elements(u64::from(SIZE * SIZE)));

    let translucent = Color::rgba(200, 40, 90, 128);
    group.bench_function("translucent_fill", |b| {
        let mut s = gradient(SIZE, SIZE);
        b.iter(|| {
            for y in 0..SIZE as i32 {
                s.hline(y, 0, SIZE as i32 - 1, black_box(translucent));
            }
        });
    });

    group.bench_function("paste_chroma_key", |b| {
        let src = gradient(SIZE / 2, SIZE / 2);
        let mut dst = gradient(SIZE, SIZE);
        let options = BlitOptions::chroma_key(Color::rgb(0, 0, 0));
        b.iter(|| dst.paste_with(black_box(&src), 37, 61, options));
    });

    group.finish();
}

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");
    let mut s = Surface::new(SIZE, SIZE).unwrap();

    group.bench_function("filled_circle", |b| {
        b.iter(|| s.circle(128, 128, black_box(100), Color::RED, true));
    });
    group.bench_function("filled_triangle", |b| {
        b.iter(|| s.tri(10, 5, 250, 120, black_box(40), 250, Color::BLUE, true));
    });
    group.bench_function("flood_fill", |b| {
        b.iter(|| {
            s.clear();
            s.circle(128, 128, 80, Color::WHITE, false);
            s.flood_fill(128, 128, black_box(Color::LIME));
        });
    });

    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let src = gradient(SIZE, SIZE);

    group.bench_function("resize_2x", |b| {
        b.iter(|| src.resize(black_box(SIZE * 2), SIZE * 2).unwrap());
    });
    group.bench_function("rotate_30", |b| {
        b.iter(|| src.rotate(black_box(30.0)).unwrap());
    });
    group.bench_function("quantize_16", |b| {
        b.iter(|| src.quantize(black_box(16)).unwrap());
    });

    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let text = "The quick brown fox\n\x0c(255,128,0)jumps over the lazy dog";
    c.bench_function("render_text", |b| {
        b.iter(|| pixelcraft_core::render_text(Color::WHITE, Color::BLACK, black_box(text)).unwrap());
    });
}

criterion_group!(benches, bench_blend, bench_primitives, bench_transform, bench_text);
criterion_main!(benches);
