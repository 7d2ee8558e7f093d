//! Block-chained streaming MurmurHash3.
//!
//! The stream is consumed in fixed 4096-byte blocks. Each full block is
//! hashed with the running seed and the result becomes the seed for the next
//! block; bytes short of a boundary are held in a buffer and hashed as one
//! final short block at finalize time. Memory use is one block regardless of
//! stream length.
//!
//! Below one block the chained hash equals the plain one-shot hash. From the
//! second block on it is its own function of the input: the full-block fold
//! creates a data dependency between blocks, so there is no combine step and
//! no internal parallelism.

use alloc::boxed::Box;

use traits::StreamHasher;

use crate::kernels::murmur3_32;

const BLOCK_LEN: usize = 4096;

/// Streaming MurmurHash3 x86_32 over chained 4096-byte blocks.
///
/// How `update` calls slice the stream never affects the result; block
/// boundaries fall at absolute stream offsets.
///
/// # Example
///
/// ```rust
/// use mmh3::{ChainedMurmur3, StreamHasher};
///
/// let mut hasher = ChainedMurmur3::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), ChainedMurmur3::hash_stream(b"hello world"));
/// ```
#[derive(Clone)]
pub struct ChainedMurmur3 {
  seed: u32,
  buffer: Box<[u8; BLOCK_LEN]>,
  len: usize,
}

impl ChainedMurmur3 {
  /// Size in bytes of one chained block.
  pub const BLOCK_LEN: usize = BLOCK_LEN;

  /// The seed carried into the next block.
  ///
  /// At a block boundary this is the hash of every block so far and can be
  /// fed to [`with_seed`](StreamHasher::with_seed) to resume the stream.
  #[inline]
  #[must_use]
  pub fn seed(&self) -> u32 {
    self.seed
  }

  /// Number of buffered bytes waiting for the next block boundary.
  #[inline]
  #[must_use]
  pub fn pending(&self) -> usize {
    self.len
  }
}

impl StreamHasher for ChainedMurmur3 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Self {
      seed: 0,
      buffer: Box::new([0u8; BLOCK_LEN]),
      len: 0,
    }
  }

  #[inline]
  fn with_seed(seed: u32) -> Self {
    Self { seed, ..Self::new() }
  }

  #[allow(clippy::indexing_slicing)]
  // All slice bounds hold by construction: len < BLOCK_LEN on entry (invariant
  // restored before every return), fill = min(space, input.len()), and
  // chunks_exact yields exactly BLOCK_LEN-sized blocks.
  fn update(&mut self, data: &[u8]) {
    let mut input = data;

    // Top up a partially filled block first so bytes stay in stream order.
    if self.len > 0 {
      let space = BLOCK_LEN - self.len;
      let fill = input.len().min(space);
      self.buffer[self.len..self.len + fill].copy_from_slice(&input[..fill]);
      self.len += fill;
      input = &input[fill..];

      if self.len == BLOCK_LEN {
        self.seed = murmur3_32(self.seed, &self.buffer[..]);
        self.len = 0;
      }
    }

    // Whole blocks are hashed straight from the input without copying.
    let mut blocks = input.chunks_exact(BLOCK_LEN);
    for block in blocks.by_ref() {
      self.seed = murmur3_32(self.seed, block);
    }

    // Hold the remainder for the next update or finalize.
    let rest = blocks.remainder();
    if !rest.is_empty() {
      self.buffer[..rest.len()].copy_from_slice(rest);
      self.len = rest.len();
    }
  }

  #[inline]
  #[allow(clippy::indexing_slicing)] // self.len < BLOCK_LEN (invariant)
  fn finalize(&self) -> u32 {
    if self.len > 0 {
      murmur3_32(self.seed, &self.buffer[..self.len])
    } else {
      self.seed
    }
  }

  #[inline]
  fn reset(&mut self) {
    self.seed = 0;
    self.len = 0;
  }
}

impl Default for ChainedMurmur3 {
  fn default() -> Self {
    Self::new()
  }
}
