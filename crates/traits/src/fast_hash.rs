//! One-shot fast hash trait (**NOT CRYPTO**).

use core::fmt::Debug;

/// A seedable non-cryptographic hash computed in one shot.
///
/// These hashes are suitable for hash tables, sharding, deduplication, and
/// other non-adversarial settings. They are **not** suitable for signatures,
/// MACs, password hashing, or any input an attacker controls.
///
/// This trait is intentionally one-shot. Incremental hashing needs
/// algorithm-specific buffering and chaining rules, so streaming is exposed
/// through concrete types and [`StreamHasher`](crate::StreamHasher).
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type (`u32` for 32-bit hashes, `u64` for wider ones).
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data` using a default seed.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}
