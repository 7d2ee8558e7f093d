//! Streaming hash trait for block-chained algorithms.
//!
//! A streaming hasher folds an unbounded byte stream into a fixed-size value
//! with bounded memory. Implementations buffer at most one block; once a block
//! fills, it is hashed and only the carried state survives.
//!
//! - **Bounded memory**: state is one block buffer plus the carried value
//! - **Split-insensitive**: how `update` calls slice the stream never changes
//!   the result
//! - **Resumable**: the carried state can be extracted and fed back in

use core::fmt::Debug;

/// Incremental hashing over a byte stream.
///
/// Implementations consume input in internal fixed-size blocks and chain the
/// hash state across blocks, so the result depends only on the concatenated
/// bytes, never on how they were delivered.
///
/// # Usage
///
/// ```rust,ignore
/// use mmh3::ChainedMurmur3;
/// use traits::StreamHasher;
///
/// // One-shot (data already in memory)
/// let h = ChainedMurmur3::hash_stream(b"hello world");
///
/// // Streaming (incremental or large data)
/// let mut hasher = ChainedMurmur3::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// let h = hasher.finalize();
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `update` splits must not affect the result:
///   `update(a); update(b)` equals `update(ab)` for any split
/// - `finalize()` must be idempotent and must not consume the hasher
/// - `reset()` must restore the hasher to its initial state
pub trait StreamHasher: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The hash output type, which doubles as the carried seed for
  /// algorithms that chain state across blocks.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the default initial seed.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher that starts from `seed`.
  ///
  /// Feeding back a value produced at a block boundary resumes the stream
  /// where it left off. Arbitrary seeds yield the algorithm's seeded variant.
  #[must_use]
  fn with_seed(seed: Self::Output) -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order, but implementations may fuse dispatch and reduce per-buffer
  /// overhead.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  ///
  /// This is a convenience for integrating with vectored I/O APIs.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the hash of everything fed so far.
  ///
  /// This method does not consume or mutate the hasher; further updates
  /// remain possible (the next finalize then covers the longer stream).
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  ///
  /// After calling this, the hasher behaves as if newly constructed.
  fn reset(&mut self);

  /// Hash `data` in one shot.
  ///
  /// Equivalent to `new()` + [`update`](Self::update) + [`finalize`](Self::finalize).
  #[inline]
  #[must_use]
  fn hash_stream(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Hash multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn hash_stream_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader to hash bytes transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use mmh3::ChainedMurmur3;
  /// use traits::StreamHasher;
  /// use std::fs::File;
  ///
  /// let file = File::open("data.bin")?;
  /// let mut reader = ChainedMurmur3::reader(file);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("{}", reader.hash());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::HashReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::HashReader::new(inner)
  }

  /// Wrap a writer to hash bytes transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use mmh3::ChainedMurmur3;
  /// use traits::StreamHasher;
  /// use std::fs::File;
  ///
  /// let file = File::create("output.bin")?;
  /// let mut writer = ChainedMurmur3::writer(file);
  /// writer.write_all(b"hello world")?;
  /// let (file, hash) = writer.into_parts();
  /// println!("{hash}");
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::HashWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::HashWriter::new(inner)
  }
}
