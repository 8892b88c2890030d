//! Hash utilities for document fingerprinting.
//!
//! The whole-file digest identifies exactly which bytes were analyzed; it
//! is computed by streaming the file in fixed-size chunks so memory use
//! stays constant regardless of file size. Hashing is an infrastructure
//! operation: failure here aborts the analysis rather than degrading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::Result;

const CHUNK_SIZE: usize = 8192;

/// Computes the SHA-256 digest of a file as 64 lowercase hex characters.
pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Computes the SHA-256 digest of a byte slice as lowercase hex.
pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn known_digest() {
        assert_eq!(
            sha256_bytes(b"hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn file_digest_matches_in_memory_digest() {
        let mut file = NamedTempFile::new().unwrap();
        let data = vec![0xABu8; CHUNK_SIZE * 3 + 17];
        file.write_all(&data).unwrap();
        let from_file = sha256_file(file.path()).unwrap();
        assert_eq!(from_file, sha256_bytes(&data));
        assert_eq!(from_file.len(), 64);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(sha256_file(Path::new("/nonexistent/input.pdf")).is_err());
    }
}
