//! Password buffer.
//!
//! The password lives in a single byte buffer sized for the worst case up
//! front, so pushing characters never reallocates and leaves no stale copy
//! on the heap. The buffer is `mlock`ed where permitted, and zeroized and
//! unlocked on drop. Display borrows `&str` from it; nothing converts it to
//! an owned `String` except the clipboard path, which zeroizes its copy.
//!
//! None of this is a guarantee. Copies made by the terminal, the clipboard
//! manager or the kernel are out of reach.

use rand::distr::{Distribution, Uniform};
use sha3::{Digest, Sha3_256};
use zeroize::Zeroize;

use crate::error::{AegurError, Result};

const SCRUB_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

pub struct Password {
    buf: Vec<u8>,
    locked: bool,
}

impl Password {
    /// Reserve room for `length` characters of up to four UTF-8 bytes each.
    ///
    /// A length the allocator cannot satisfy is an error, not an abort.
    pub(crate) fn with_capacity(length: usize) -> Result<Self> {
        let too_large = || AegurError::LengthTooLarge { length };
        let bytes = length.checked_mul(4).ok_or_else(too_large)?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(bytes).map_err(|e| {
            tracing::debug!(bytes, error = %e, "password buffer reservation failed");
            too_large()
        })?;
        let locked = lock(&buf);
        if !locked {
            tracing::debug!(bytes, "mlock refused, password buffer may be swapped");
        }
        Ok(Self { buf, locked })
    }

    pub(crate) fn push(&mut self, c: char) {
        let mut tmp = [0u8; 4];
        let encoded = c.encode_utf8(&mut tmp).as_bytes();
        debug_assert!(self.buf.len() + encoded.len() <= self.buf.capacity());
        self.buf.extend_from_slice(encoded);
        tmp.zeroize();
    }

    pub fn as_str(&self) -> &str {
        // Only ever filled from `char`s or ASCII scrub bytes.
        std::str::from_utf8(&self.buf).unwrap_or("")
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.as_str().chars().count()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Lowercase hex SHA3-256 of the UTF-8 bytes, for audit without display.
    pub fn sha3_256_hex(&self) -> String {
        hex::encode(Sha3_256::digest(&self.buf))
    }

    /// Overwrite every byte of the buffer with a random lowercase letter.
    ///
    /// The buffer stays valid UTF-8 and keeps its byte length. It is zeroized
    /// again on drop.
    pub fn scrub(&mut self) {
        let letters = Uniform::new(0, SCRUB_ALPHABET.len()).expect("alphabet is non-empty");
        let mut rng = rand::rng();
        for byte in self.buf.iter_mut() {
            // Volatile so the overwrite survives even if the buffer is never read again.
            unsafe { std::ptr::write_volatile(byte, SCRUB_ALPHABET[letters.sample(&mut rng)]) };
        }
        tracing::debug!(bytes = self.buf.len(), "password buffer scrubbed");
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.buf.zeroize();
        if self.locked {
            unlock(&self.buf);
        }
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("bytes", &self.buf.len())
            .field("locked", &self.locked)
            .finish_non_exhaustive()
    }
}

#[cfg(unix)]
fn lock(buf: &Vec<u8>) -> bool {
    if buf.capacity() == 0 {
        return false;
    }
    unsafe { libc::mlock(buf.as_ptr() as *const libc::c_void, buf.capacity()) == 0 }
}

#[cfg(unix)]
fn unlock(buf: &Vec<u8>) {
    unsafe { libc::munlock(buf.as_ptr() as *const libc::c_void, buf.capacity()) };
}

#[cfg(not(unix))]
fn lock(_: &Vec<u8>) -> bool {
    false
}

#[cfg(not(unix))]
fn unlock(_: &Vec<u8>) {}
