use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use smalluid::{Hex, SmallUid, ThreadRandom, TimeSource, decode_base62, encode_base62};

struct FixedMockTime {
    millis: u64,
}

impl TimeSource for FixedMockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration.
const TOTAL_IDS: usize = 4096;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        let time = FixedMockTime {
            millis: 1_700_000_000_000,
        };
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(SmallUid::generate_with(&time, &ThreadRandom));
            }
        });
    });

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let hex = Hex::from_string("1234567890abcdef").unwrap();
    c.bench_function("encode_base62", |b| {
        b.iter(|| black_box(encode_base62(black_box(&hex)).unwrap()));
    });
}

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_base62", |b| {
        b.iter(|| black_box(decode_base62(black_box("LscmjzUyKLR")).unwrap()));
    });
}

criterion_group!(benches, bench_generate, bench_encode, bench_decode);
criterion_main!(benches);
