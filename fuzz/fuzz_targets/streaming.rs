//! Fuzz target for the streaming hash API.
//!
//! Tests that arbitrary sequences of update calls produce correct results.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mmh3::{ChainedMurmur3, StreamHasher};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let expected = ChainedMurmur3::hash_stream(data);

  let mut hasher = ChainedMurmur3::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 8192).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finalize(), expected, "chained streaming mismatch");

  // Resuming from the last block boundary must agree as well
  let boundary = (data.len() / ChainedMurmur3::BLOCK_LEN) * ChainedMurmur3::BLOCK_LEN;
  let mut resumed = ChainedMurmur3::with_seed(ChainedMurmur3::hash_stream(&data[..boundary]));
  resumed.update(&data[boundary..]);
  assert_eq!(resumed.finalize(), expected, "chained resume mismatch");
});
