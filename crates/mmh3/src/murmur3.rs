//! MurmurHash3, 32-bit variant (**NOT CRYPTO**).
//!
//! MurmurHash3 is a fast hash for hash tables, sharding, and fingerprints.
//! It is trivially invertible per block and offers no resistance to chosen
//! inputs; never use it where collisions carry a security cost.

use traits::FastHash;

use crate::kernels;

/// MurmurHash3 x86_32 ("murmur3A").
///
/// One-shot hashing via [`FastHash`]; for incremental hashing over long
/// streams see [`ChainedMurmur3`](crate::ChainedMurmur3).
#[derive(Clone, Default)]
pub struct Murmur3_32;

impl FastHash for Murmur3_32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    kernels::murmur3_32(seed, data)
  }
}
