//! Property-based tests for the chained MurmurHash3 stream.
//!
//! These tests verify invariants that must hold for all inputs, not just
//! specific test vectors. Uses proptest for randomized input generation.

use mmh3::{ChainedMurmur3, Murmur3_32, murmur3_32, murmur3_32_words};
use proptest::prelude::*;
use traits::{FastHash, StreamHasher};

// Test Strategies

/// Generate arbitrary byte vectors spanning several 4096-byte blocks.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..12288)
}

/// Generate multiple split points for chunked testing.
fn arb_splits(len: usize, count: usize) -> impl Strategy<Value = Vec<usize>> {
  prop::collection::vec(0..=len, count).prop_map(move |mut splits| {
    splits.sort();
    splits.push(len);
    splits.dedup();
    splits
  })
}

// Generic Property Tests

/// Test that incremental updates produce the same result as one-shot.
fn prop_incremental_equals_oneshot(data: &[u8], split: usize) -> bool {
  let split = split.min(data.len());
  let (a, b) = data.split_at(split);

  let oneshot = ChainedMurmur3::hash_stream(data);

  let mut incremental = ChainedMurmur3::new();
  incremental.update(a);
  incremental.update(b);

  incremental.finalize() == oneshot
}

/// Test that multiple incremental updates produce the same result.
fn prop_multi_incremental(data: &[u8], splits: &[usize]) -> bool {
  let oneshot = ChainedMurmur3::hash_stream(data);

  let mut hasher = ChainedMurmur3::new();
  let mut prev = 0;
  for &split in splits {
    let split = split.min(data.len());
    if split > prev {
      hasher.update(&data[prev..split]);
      prev = split;
    }
  }
  if prev < data.len() {
    hasher.update(&data[prev..]);
  }

  hasher.finalize() == oneshot
}

/// Test that reset returns the hasher to its initial state.
fn prop_reset_works(data: &[u8]) -> bool {
  let mut hasher = ChainedMurmur3::new();
  hasher.update(data);
  hasher.reset();
  hasher.update(data);

  hasher.finalize() == ChainedMurmur3::hash_stream(data)
}

// Chained Stream Property Tests

proptest! {
  #![proptest_config(ProptestConfig::with_cases(1000))]

  #[test]
  fn chained_incremental_equals_oneshot(data in arb_data(), split in 0..12288usize) {
    prop_assert!(prop_incremental_equals_oneshot(&data, split));
  }

  #[test]
  fn chained_multi_incremental(data in arb_data(), splits in arb_splits(12288, 5)) {
    prop_assert!(prop_multi_incremental(&data, &splits));
  }

  #[test]
  fn chained_reset(data in arb_data()) {
    prop_assert!(prop_reset_works(&data));
  }

  #[test]
  fn chained_resume_at_block_boundary(data in arb_data()) {
    let boundary = (data.len() / ChainedMurmur3::BLOCK_LEN) * ChainedMurmur3::BLOCK_LEN;
    let head = ChainedMurmur3::hash_stream(&data[..boundary]);

    let mut resumed = ChainedMurmur3::with_seed(head);
    resumed.update(&data[boundary..]);

    prop_assert_eq!(resumed.finalize(), ChainedMurmur3::hash_stream(&data));
  }

  #[test]
  fn chained_below_one_block_is_oneshot(data in prop::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(ChainedMurmur3::hash_stream(&data), murmur3_32(0, &data));
  }

  #[test]
  fn chained_finalize_is_stable(data in arb_data()) {
    let mut hasher = ChainedMurmur3::new();
    hasher.update(&data);
    let first = hasher.finalize();
    prop_assert_eq!(hasher.finalize(), first);
  }
}

// Kernel Property Tests

proptest! {
  #![proptest_config(ProptestConfig::with_cases(1000))]

  #[test]
  fn oneshot_matches_seeded_default(data in prop::collection::vec(any::<u8>(), 0..2048)) {
    prop_assert_eq!(Murmur3_32::hash(&data), Murmur3_32::hash_with_seed(0, &data));
  }

  #[test]
  fn words_kernel_matches_byte_kernel(seed in any::<u32>(), words in prop::collection::vec(any::<u32>(), 0..64)) {
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    prop_assert_eq!(murmur3_32_words(seed, &words), murmur3_32(seed, &bytes));
  }

  // Every per-group step and the finalizer are bijections in h, so for fixed
  // data the seed-to-hash map is injective.
  #[test]
  fn distinct_seeds_give_distinct_hashes(
    s1 in any::<u32>(),
    s2 in any::<u32>(),
    data in prop::collection::vec(any::<u8>(), 0..256)
  ) {
    prop_assume!(s1 != s2);
    prop_assert_ne!(murmur3_32(s1, &data), murmur3_32(s2, &data));
  }
}
