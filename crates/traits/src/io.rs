//! I/O adapters that hash bytes as they pass through.
//!
//! [`HashReader`] and [`HashWriter`] wrap any `Read` or `Write` and feed every
//! byte that actually crosses the boundary to a [`StreamHasher`](crate::StreamHasher),
//! so hashing a file or socket stream needs no second pass over the data.
//!
//! # Example
//!
//! ```rust
//! # use traits::StreamHasher;
//! # #[derive(Clone, Default)]
//! # struct Sum32(u32);
//! # impl StreamHasher for Sum32 {
//! #   const OUTPUT_SIZE: usize = 4;
//! #   type Output = u32;
//! #   fn new() -> Self { Self(0) }
//! #   fn with_seed(seed: u32) -> Self { Self(seed) }
//! #   fn update(&mut self, data: &[u8]) {
//! #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
//! #   }
//! #   fn finalize(&self) -> u32 { self.0 }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! # use std::io::Cursor;
//! let mut reader = Sum32::reader(Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(
//!   reader.hash(),
//!   u32::from(b'a') + u32::from(b'b') + u32::from(b'c')
//! );
//! # Ok::<(), std::io::Error>(())
//! ```

use crate::StreamHasher;

#[inline]
fn read_and_update<R>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[inline]
fn read_vectored_and_update<R>(
  inner: &mut R,
  bufs: &mut [std::io::IoSliceMut<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read_vectored(bufs)?;
  let mut remaining = n;
  for buf in bufs {
    let to_hash = remaining.min(buf.len());
    if to_hash == 0 {
      break;
    }
    if let Some(data) = buf.get(..to_hash) {
      on_data(data);
    }
    remaining -= to_hash;
  }
  Ok(n)
}

#[inline]
fn write_and_update<W>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  on_data(buf);
  inner.write(buf)
}

#[inline]
fn write_vectored_and_update<W>(
  inner: &mut W,
  bufs: &[std::io::IoSlice<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  for buf in bufs {
    on_data(buf);
  }
  inner.write_vectored(bufs)
}

// ─────────────────────────────────────────────────────────────────────────────
// Reader
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Read`](std::io::Read) and hashes everything read through it.
///
/// All reads pass through to the inner reader while the hasher is updated with
/// the bytes actually read, so short reads are accounted exactly.
///
/// # Type Parameters
///
/// - `R`: The inner reader type
/// - `H`: The streaming hash algorithm (e.g. `ChainedMurmur3`)
///
/// # Example
///
/// ```rust
/// # use traits::StreamHasher;
/// # #[derive(Clone, Default)]
/// # struct Sum32(u32);
/// # impl StreamHasher for Sum32 {
/// #   const OUTPUT_SIZE: usize = 4;
/// #   type Output = u32;
/// #   fn new() -> Self { Self(0) }
/// #   fn with_seed(seed: u32) -> Self { Self(seed) }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
/// #   }
/// #   fn finalize(&self) -> u32 { self.0 }
/// #   fn reset(&mut self) { self.0 = 0; }
/// # }
/// # use std::io::Read;
/// # use std::io::Cursor;
/// let mut reader = Sum32::reader(Cursor::new(b"abc".to_vec()));
/// let mut out = Vec::new();
/// reader.read_to_end(&mut out)?;
/// assert_eq!(out, b"abc");
/// assert_eq!(
///   reader.hash(),
///   u32::from(b'a') + u32::from(b'b') + u32::from(b'c')
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct HashReader<R, H: StreamHasher> {
  inner: R,
  hasher: H,
}

impl<R, H: StreamHasher> HashReader<R, H> {
  /// Create a new reader wrapper with the default initial state.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self {
      inner,
      hasher: H::new(),
    }
  }

  /// Create a new reader wrapper whose hasher starts from `seed`.
  ///
  /// Useful for resuming a stream hash from carried state.
  #[inline]
  #[must_use]
  pub fn with_seed(inner: R, seed: H::Output) -> Self {
    Self {
      inner,
      hasher: H::with_seed(seed),
    }
  }

  /// Get the hash of everything read so far.
  ///
  /// This does not consume the reader or disturb the hasher;
  /// further reads keep updating it.
  #[inline]
  #[must_use]
  pub fn hash(&self) -> H::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap this `HashReader`, returning the inner reader and the final hash.
  #[inline]
  pub fn into_parts(self) -> (R, H::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap this `HashReader`, returning the inner reader and discarding the hash.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  /// Get a mutable reference to the inner reader.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: std::io::Read, H: StreamHasher> std::io::Read for HashReader<R, H> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    read_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [std::io::IoSliceMut<'_>]) -> std::io::Result<usize> {
    read_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Writer
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Write`](std::io::Write) and hashes everything written through it.
///
/// # Important: Hash-Then-Write Order
///
/// The hasher is updated **before** the bytes reach the inner writer.
/// If a write fails, the caller knows exactly what data was hashed
/// versus what was successfully written.
///
/// # Type Parameters
///
/// - `W`: The inner writer type
/// - `H`: The streaming hash algorithm (e.g. `ChainedMurmur3`)
///
/// # Example
///
/// ```rust
/// # use traits::StreamHasher;
/// # #[derive(Clone, Default)]
/// # struct Sum32(u32);
/// # impl StreamHasher for Sum32 {
/// #   const OUTPUT_SIZE: usize = 4;
/// #   type Output = u32;
/// #   fn new() -> Self { Self(0) }
/// #   fn with_seed(seed: u32) -> Self { Self(seed) }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
/// #   }
/// #   fn finalize(&self) -> u32 { self.0 }
/// #   fn reset(&mut self) { self.0 = 0; }
/// # }
/// # use std::io::Write;
/// let mut writer = Sum32::writer(Vec::new());
/// writer.write_all(b"hello world")?;
/// let (out, hash) = writer.into_parts();
/// assert_eq!(out, b"hello world".to_vec());
/// assert_eq!(
///   hash,
///   b"hello world"
///     .iter()
///     .fold(0u32, |acc, &b| acc.wrapping_add(u32::from(b)))
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct HashWriter<W, H: StreamHasher> {
  inner: W,
  hasher: H,
}

impl<W, H: StreamHasher> HashWriter<W, H> {
  /// Create a new writer wrapper with the default initial state.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self {
      inner,
      hasher: H::new(),
    }
  }

  /// Create a new writer wrapper whose hasher starts from `seed`.
  #[inline]
  #[must_use]
  pub fn with_seed(inner: W, seed: H::Output) -> Self {
    Self {
      inner,
      hasher: H::with_seed(seed),
    }
  }

  /// Get the hash of everything written so far.
  #[inline]
  #[must_use]
  pub fn hash(&self) -> H::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap this `HashWriter`, returning the inner writer and the final hash.
  #[inline]
  pub fn into_parts(self) -> (W, H::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap this `HashWriter`, returning the inner writer and discarding the hash.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  /// Get a mutable reference to the inner writer.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

impl<W: std::io::Write, H: StreamHasher> std::io::Write for HashWriter<W, H> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    write_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[std::io::IoSlice<'_>]) -> std::io::Result<usize> {
    write_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}
