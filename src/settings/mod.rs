//! Saved defaults.

mod file;

use std::path::PathBuf;

use crate::entropy::DEFAULT_GUESSES_PER_SECOND;
use crate::error::Result;
use crate::pass::Mode;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pass_length: usize,
    pub mode: Mode,
    pub guesses_per_second: u64,
    /// Hide and scrub the password even when `mode` picks another pool.
    pub paranoid: bool,
}

impl Settings {
    /// Load from the default path. A missing file yields the defaults.
    pub fn load_from_file() -> Result<Self> {
        Self::load_from(&file::default_path())
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<PathBuf> {
        let path = file::default_path();
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        file::save(path, self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            mode: Mode::Strong,
            guesses_per_second: DEFAULT_GUESSES_PER_SECOND,
            paranoid: false,
        }
    }
}
