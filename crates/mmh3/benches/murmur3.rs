//! MurmurHash3 benchmarks.
//!
//! Run: `cargo bench -p mmh3 -- murmur3`
//! Native: `RUSTFLAGS='-C target-cpu=native' cargo bench -p mmh3 -- murmur3`
//!
//! This benchmarks:
//! - One-shot kernel throughput across input sizes
//! - The chained stream across update granularities
//! - The murmur3 crate as an external baseline

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mmh3::{ChainedMurmur3, Murmur3_32};
use traits::{FastHash as _, StreamHasher as _};

/// Standard benchmark sizes.
const SIZES: [usize; 7] = [64, 256, 1024, 4096, 16384, 65536, 1048576];

/// Update granularities for the streaming path, in bytes.
const CHUNK_SIZES: [usize; 4] = [64, 512, 4096, 65536];

/// Benchmark the one-shot kernel.
fn bench_oneshot(c: &mut Criterion) {
  let mut group = c.benchmark_group("murmur3/oneshot");

  for size in SIZES {
    let data = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(Murmur3_32::hash_with_seed(0, data)));
    });
  }

  group.finish();
}

/// Benchmark the chained stream fed in fixed-size chunks.
fn bench_chained(c: &mut Criterion) {
  let mut group = c.benchmark_group("murmur3/chained");
  let data = vec![0u8; 1 << 20];

  for chunk in CHUNK_SIZES {
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_with_input(BenchmarkId::from_parameter(chunk), &data, |b, data| {
      b.iter(|| {
        let mut hasher = ChainedMurmur3::new();
        for piece in data.chunks(chunk) {
          hasher.update(piece);
        }
        core::hint::black_box(hasher.finalize())
      });
    });
  }

  group.finish();
}

/// Benchmark the murmur3 crate on identical input as an external baseline.
fn bench_oracle(c: &mut Criterion) {
  let mut group = c.benchmark_group("murmur3/oracle");

  for size in SIZES {
    let data = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| {
        let mut cursor = std::io::Cursor::new(data.as_slice());
        core::hint::black_box(murmur3::murmur3_32(&mut cursor, 0))
      });
    });
  }

  group.finish();
}

criterion_group!(benches, bench_oneshot, bench_chained, bench_oracle,);
criterion_main!(benches);
