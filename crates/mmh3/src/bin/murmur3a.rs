//! Hash standard input with block-chained MurmurHash3.
//!
//! Reads stdin to EOF, chaining the hash across 4096-byte blocks, and prints
//! the final 32-bit value as one decimal line on stdout. Any read or write
//! failure is fatal: the error goes to stderr, nothing lands on stdout, and
//! the process exits non-zero. Arguments are ignored.

use std::io::{self, ErrorKind, Read, Write};
use std::process::ExitCode;

use mmh3::{ChainedMurmur3, StreamHasher};

fn hash_stdin() -> io::Result<u32> {
  let mut reader = ChainedMurmur3::reader(io::stdin().lock());
  let mut block = [0u8; ChainedMurmur3::BLOCK_LEN];
  loop {
    match reader.read(&mut block) {
      Ok(0) => break,
      Ok(_) => {}
      Err(err) if err.kind() == ErrorKind::Interrupted => {}
      Err(err) => return Err(err),
    }
  }
  Ok(reader.hash())
}

fn main() -> ExitCode {
  let hash = match hash_stdin() {
    Ok(hash) => hash,
    Err(err) => {
      eprintln!("murmur3a: {err}");
      return ExitCode::FAILURE;
    }
  };

  let mut stdout = io::stdout().lock();
  if let Err(err) = writeln!(stdout, "{hash}").and_then(|()| stdout.flush()) {
    eprintln!("murmur3a: {err}");
    return ExitCode::FAILURE;
  }
  ExitCode::SUCCESS
}
