//! Random sources.
//!
//! Both sources are cryptographically secure. `Thread` is the default: a
//! thread-local ChaCha generator reseeded from the OS. `Os` asks the kernel
//! directly for every draw. If the OS source fails the process panics; there
//! is nothing sensible to fall back to.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::Result;
use crate::pass::{self, Mode, Password};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    #[default]
    Thread,
    Os,
}

impl Source {
    pub fn from_flag(urandom: bool) -> Self {
        if urandom { Source::Os } else { Source::Thread }
    }

    pub fn name(self) -> &'static str {
        match self {
            Source::Thread => "thread-local ChaCha12 (OS-seeded)",
            Source::Os => "OS getrandom",
        }
    }
}

/// Generate a password from the chosen source.
pub fn generate(source: Source, length: usize, mode: Mode) -> Result<Password> {
    tracing::debug!(source = source.name(), "drawing password");
    match source {
        Source::Thread => pass::generate(length, mode, &mut rand::rng()),
        Source::Os => pass::generate(length, mode, &mut OsRng.unwrap_err()),
    }
}
