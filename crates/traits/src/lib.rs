//! Core hashing traits for the mmh3 workspace.
//!
//! This crate provides the foundational traits that the hashing crates in this
//! workspace conform to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | One-shot seeded non-cryptographic hashes | MurmurHash3 |
//! | [`StreamHasher`] | Incremental hashing with carried state | block-chained MurmurHash3 |
//!
//! # I/O Adapters
//!
//! With the `std` feature, [`io`] provides [`HashReader`](io::HashReader) and
//! [`HashWriter`](io::HashWriter), which hash bytes transparently as they pass
//! through a `Read` or `Write`.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod fast_hash;
mod stream_hash;

#[cfg(feature = "std")]
pub mod io;

pub use fast_hash::FastHash;
pub use stream_hash::StreamHasher;
