//! Differential fuzzing against a reference implementation.
//!
//! Compares our MurmurHash3 against the murmur3 crate to catch any
//! discrepancies.

#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use mmh3::{ChainedMurmur3, FastHash, Murmur3_32, StreamHasher, murmur3_32};

fuzz_target!(|data: &[u8]| {
  let ours = Murmur3_32::hash_with_seed(0, data);
  let reference = murmur3::murmur3_32(&mut Cursor::new(data), 0).unwrap();

  assert_eq!(
    ours, reference,
    "murmur3 differential mismatch: ours={:#010x}, reference={:#010x}, len={}",
    ours, reference, data.len()
  );

  // Self-consistency check: the stream must equal a per-block seed fold
  let mut seed = 0u32;
  let mut rest = data;
  while rest.len() >= ChainedMurmur3::BLOCK_LEN {
    let (block, tail) = rest.split_at(ChainedMurmur3::BLOCK_LEN);
    seed = murmur3_32(seed, block);
    rest = tail;
  }
  if !rest.is_empty() {
    seed = murmur3_32(seed, rest);
  }
  assert_eq!(
    ChainedMurmur3::hash_stream(data),
    seed,
    "chained self-consistency mismatch"
  );
});
