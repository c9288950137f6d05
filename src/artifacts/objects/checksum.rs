//! File checksums
//!
//! Two sums identify tracked files. The path hash folds the bytes of a path
//! into a value below 1000 and only seeds the content hash. The content hash
//! adds every byte of the file, 32 at a time, on top of that seed.
//!
//! Small files skip the modulo step entirely: below `LARGE_FILE_THRESHOLD`
//! bytes the accumulator cannot reach `CONTENT_HASH_MODULUS`, even if every
//! byte is 0xff. The last chunk of a file is zero-padded, which leaves the
//! sum unchanged.

use crate::artifacts::objects::file::ContentHash;
use std::io::{self, Read};

pub const CHUNK_SIZE: usize = 32;
pub const PATH_HASH_MODULUS: u64 = 1000;
pub const CONTENT_HASH_MODULUS: u64 = 2_000_000_000;
pub const LARGE_FILE_THRESHOLD: u64 = 7_812_500;

/// Sum of the path's bytes, reduced modulo 1000 whenever it reaches 1000
pub fn path_hash(path: &str) -> u64 {
    path.bytes().fold(0, |hash, byte| {
        let hash = hash + u64::from(byte);
        if hash >= PATH_HASH_MODULUS {
            hash % PATH_HASH_MODULUS
        } else {
            hash
        }
    })
}

/// Streaming content checksum over a reader
#[derive(Debug)]
pub struct Checksum<R> {
    reader: R,
    accumulator: u64,
    reduce: bool,
}

impl<R: Read> Checksum<R> {
    /// Start a checksum seeded with the hash of `path`
    ///
    /// `len` is the byte length of the content and selects whether the
    /// accumulator gets reduced after every chunk.
    pub fn new(reader: R, path: &str, len: u64) -> Self {
        Checksum {
            reader,
            accumulator: path_hash(path),
            reduce: len >= LARGE_FILE_THRESHOLD,
        }
    }

    pub fn finish(mut self) -> io::Result<ContentHash> {
        let mut chunk = [0u8; CHUNK_SIZE];

        while self.read_chunk(&mut chunk)? > 0 {
            self.accumulator += chunk.iter().map(|&byte| u64::from(byte)).sum::<u64>();

            if self.reduce && self.accumulator >= CONTENT_HASH_MODULUS {
                self.accumulator %= CONTENT_HASH_MODULUS;
            }
        }

        // both branches keep the accumulator below CONTENT_HASH_MODULUS
        Ok(ContentHash::new(self.accumulator as u32))
    }

    // Fill the chunk completely unless the reader runs dry, then pad with zeros.
    fn read_chunk(&mut self, chunk: &mut [u8; CHUNK_SIZE]) -> io::Result<usize> {
        let mut filled = 0;

        while filled < CHUNK_SIZE {
            match self.reader.read(&mut chunk[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        chunk[filled..].fill(0);
        Ok(filled)
    }
}

/// Checksum an in-memory buffer as if it were a file stored at `path`
pub fn hash_bytes(path: &str, data: &[u8]) -> ContentHash {
    Checksum::new(data, path, data.len() as u64)
        .finish()
        .unwrap_or_default()
}
