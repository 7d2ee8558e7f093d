//! I/O adapters for stream hashing.
//!
//! This module provides [`HashReader`] and [`HashWriter`] which wrap
//! [`std::io::Read`] and [`std::io::Write`] implementations to hash data
//! transparently during I/O operations.
//!
//! # Performance
//!
//! - Zero-cost abstraction: All methods are `#[inline]`
//! - Vectored I/O support: both adapters forward `read_vectored`/`write_vectored`
//! - Correctness: Only hashes bytes actually transferred (handles short reads/writes)
//!
//! # Example
//!
//! ```rust
//! use std::io::{Cursor, Read};
//!
//! use mmh3::{ChainedMurmur3, StreamHasher};
//!
//! let mut reader = ChainedMurmur3::reader(Cursor::new(b"hello world".to_vec()));
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(contents, b"hello world");
//! assert_eq!(reader.hash(), ChainedMurmur3::hash_stream(&contents));
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::{HashReader, HashWriter};
