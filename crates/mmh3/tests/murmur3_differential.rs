use std::io::Cursor;

use mmh3::{ChainedMurmur3, Murmur3_32};
use proptest::prelude::*;
use traits::{FastHash as _, StreamHasher as _};

fn murmur3_32_ref(seed: u32, data: &[u8]) -> u32 {
  murmur3::murmur3_32(&mut Cursor::new(data), seed).expect("in-memory read cannot fail")
}

fn chained_ref(data: &[u8]) -> u32 {
  let mut seed = 0u32;
  let mut rest = data;
  while rest.len() >= 4096 {
    let (block, tail) = rest.split_at(4096);
    seed = murmur3_32_ref(seed, block);
    rest = tail;
  }
  if !rest.is_empty() {
    seed = murmur3_32_ref(seed, rest);
  }
  seed
}

proptest! {
  #[test]
  fn murmur3_32_matches_murmur3_crate(seed in any::<u32>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let ours = Murmur3_32::hash_with_seed(seed, &data);
    let expected = murmur3_32_ref(seed, &data);
    prop_assert_eq!(ours, expected);
  }

  #[test]
  fn chained_matches_per_block_oracle(data in proptest::collection::vec(any::<u8>(), 0..16384)) {
    let ours = ChainedMurmur3::hash_stream(&data);
    let expected = chained_ref(&data);
    prop_assert_eq!(ours, expected);
  }
}
