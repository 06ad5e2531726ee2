use criterion::*;
use reciprocal_rom::*;
use std::io::sink;

fn bench_rom(c: &mut Criterion) {
    let mut group = c.benchmark_group("rom");
    group.throughput(Throughput::Elements(TABLE_SIZE as u64));

    group.bench_function("entries", |b| {
        b.iter(|| entries().map(|e| u32::from(e.code())).sum::<u32>());
    });

    group.bench_function("write_rom", |b| {
        b.iter(|| write_rom(&mut sink()));
    });

    group.bench_function("render", |b| {
        b.iter(render);
    });
}

criterion_group!(benches, bench_rom);
criterion_main!(benches);
