//! Portable scalar kernels for MurmurHash3 x86_32.
//!
//! Both kernels are `const fn` and allocation-free. Group reads are fixed
//! little-endian regardless of host byte order, which makes the output
//! reproducible across targets and equal to the published
//! MurmurHash3_x86_32 test vectors.

#![allow(clippy::indexing_slicing)] // Tight block parsing

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

/// Scramble one 32-bit group before it is folded into the state.
#[inline(always)]
const fn scramble(k: u32) -> u32 {
  k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

/// Final avalanche (fmix32).
#[inline(always)]
const fn fmix32(mut h: u32) -> u32 {
  h ^= h >> 16;
  h = h.wrapping_mul(0x85eb_ca6b);
  h ^= h >> 13;
  h = h.wrapping_mul(0xc2b2_ae35);
  h ^= h >> 16;
  h
}

/// Hash `data` with `seed` using MurmurHash3 x86_32.
///
/// Deterministic, infallible, and valid for any length including zero.
/// `murmur3_32(0, b"")` is `0`.
#[inline]
#[must_use]
pub const fn murmur3_32(seed: u32, data: &[u8]) -> u32 {
  let mut h = seed;

  let groups = data.len() / 4;
  let mut i = 0;
  while i < groups {
    let g = [data[i * 4], data[i * 4 + 1], data[i * 4 + 2], data[i * 4 + 3]];
    h ^= scramble(u32::from_le_bytes(g));
    h = h.rotate_left(13);
    h = h.wrapping_mul(5).wrapping_add(0xe654_6b64);
    i += 1;
  }

  // The 1-3 byte tail zero-pads to one little-endian group. It is scrambled
  // and XORed only; the rotate/multiply step applies to full groups alone.
  let base = groups * 4;
  match data.len() % 4 {
    1 => h ^= scramble(u32::from_le_bytes([data[base], 0, 0, 0])),
    2 => h ^= scramble(u32::from_le_bytes([data[base], data[base + 1], 0, 0])),
    3 => h ^= scramble(u32::from_le_bytes([data[base], data[base + 1], data[base + 2], 0])),
    _ => {}
  }

  h ^= data.len() as u32;
  fmix32(h)
}

/// Hash a slice of whole 32-bit words with `seed`.
///
/// Every word is one full group, so there is no tail; the length folded into
/// the finalizer is the byte length `4 * words.len()`. Equivalent to
/// [`murmur3_32`] over the words' little-endian byte encoding.
#[inline]
#[must_use]
pub const fn murmur3_32_words(seed: u32, words: &[u32]) -> u32 {
  let mut h = seed;

  let mut i = 0;
  while i < words.len() {
    h ^= scramble(words[i]);
    h = h.rotate_left(13);
    h = h.wrapping_mul(5).wrapping_add(0xe654_6b64);
    i += 1;
  }

  h ^= (words.len() * 4) as u32;
  fmix32(h)
}
