//! Password generation.

use rand::CryptoRng;
use rand::distr::{Distribution, Uniform};

use super::{Mode, Password, charset};
use crate::error::{AegurError, Result};

/// Draw `length` characters independently and uniformly from the mode's pool.
///
/// `Uniform` rejects draws outside the largest multiple of the pool size, so
/// every index is equally likely. Repeats are allowed.
pub fn generate<R: CryptoRng + ?Sized>(length: usize, mode: Mode, rng: &mut R) -> Result<Password> {
    if length == 0 {
        return Err(AegurError::InvalidLength { length: 0 });
    }

    let pool = charset::pool_for(mode);
    let index = Uniform::new(0, pool.len())
        .map_err(|e| AegurError::pool_integrity(format!("pool '{mode}' unusable: {e}")))?;

    let mut password = Password::with_capacity(length)?;
    for _ in 0..length {
        password.push(pool[index.sample(rng)]);
    }

    tracing::debug!(%mode, length, pool = pool.len(), "password generated");
    Ok(password)
}
