//! MurmurHash3 (x86_32) with a block-chained streaming driver.
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! this workspace. Dev-only dependencies are used for oracle testing and
//! benchmarking.
//!
//! # Types
//!
//! | Type | Purpose | Output |
//! |------|---------|--------|
//! | [`Murmur3_32`] | One-shot MurmurHash3 x86_32 (**NOT CRYPTO**) | `u32` |
//! | [`ChainedMurmur3`] | Streaming hash over 4096-byte chained blocks | `u32` |
//!
//! The raw kernels are exposed as `const fn`s: [`murmur3_32`] over bytes and
//! [`murmur3_32_words`] over whole 32-bit words.
//!
//! Group reads are fixed little-endian on every host, so results match the
//! published MurmurHash3_x86_32 test vectors everywhere.
//!
//! # Example
//!
//! ```rust
//! use mmh3::{ChainedMurmur3, FastHash, Murmur3_32, StreamHasher};
//!
//! // One-shot computation (data already in memory)
//! let h = Murmur3_32::hash_with_seed(0, b"hello world");
//!
//! // Streaming computation; below one block the two agree
//! let mut hasher = ChainedMurmur3::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(hasher.finalize(), h);
//! ```
//!
//! Past one 4096-byte block, [`ChainedMurmur3`] is its own function of the
//! input: each full block is hashed with the previous block's result as seed,
//! so arbitrarily long streams are hashed in constant memory.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded
//! use; [`ChainedMurmur3`] additionally needs `alloc` for its block buffer.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod kernels;
mod murmur3;

#[cfg(feature = "alloc")]
mod chained;

#[cfg(feature = "std")]
pub mod io;

#[cfg(feature = "alloc")]
pub use chained::ChainedMurmur3;
pub use kernels::{murmur3_32, murmur3_32_words};
pub use murmur3::Murmur3_32;
// Re-export traits for convenience
pub use traits::{FastHash, StreamHasher};
