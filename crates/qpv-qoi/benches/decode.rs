use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use nanorand::{Rng, WyRand};
use qpv_qoi::Raster;

/// A photo-like test image, smooth gradients with some noise
fn test_image(width: usize, height: usize) -> Raster {
    let mut rand = WyRand::new_seed(11);
    let mut pixels = Vec::with_capacity(width * height * 4);

    for y in 0..height {
        for x in 0..width {
            let noise: u8 = rand.generate_range(0_u8..4);
            pixels.extend_from_slice(&[
                (x / 4) as u8 ^ noise,
                (y / 4) as u8,
                ((x + y) / 8) as u8,
                255
            ]);
        }
    }
    Raster::from_rgba(width, height, pixels).unwrap()
}

fn decode_rapid_qoi(data: &[u8]) -> Vec<u8> {
    rapid_qoi::Qoi::decode_alloc(data).unwrap().1
}

fn decode_qpv_qoi(data: &[u8]) -> Raster {
    qpv_qoi::decode(data).unwrap()
}

fn bench_decode(c: &mut Criterion) {
    let raster = test_image(1024, 768);
    let data = qpv_qoi::encode(&raster).unwrap();

    let mut group = c.benchmark_group("qoi: Simple decode");

    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("rapid-qoi", |b| {
        b.iter(|| black_box(decode_rapid_qoi(data.as_slice())))
    });

    group.bench_function("qpv-qoi", |b| {
        b.iter(|| black_box(decode_qpv_qoi(data.as_slice())))
    });
}

fn bench_encode(c: &mut Criterion) {
    let raster = test_image(1024, 768);

    let mut group = c.benchmark_group("qoi: Simple encode");

    group.throughput(Throughput::Bytes(raster.as_rgba().len() as u64));

    group.bench_function("qpv-qoi", |b| {
        b.iter(|| black_box(qpv_qoi::encode(&raster).unwrap()))
    });
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=bench_decode, bench_encode);

criterion_main!(benches);
