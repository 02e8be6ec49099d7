//! Settings file persistence.
//!
//! One `key=value` per line under `$HOME/.config/aegur/settings`. Blank lines
//! and `#` comments are ignored; unknown keys are skipped with a warning so
//! older binaries can read newer files.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::Settings;
use crate::cli::prompts;
use crate::error::{AegurError, Result};

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config").join("aegur").join("settings")
}

pub fn save(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let data = format!(
        "length={}\nmode={}\nguess_rate={}\nparanoid={}\n",
        settings.pass_length, settings.mode, settings.guesses_per_second, settings.paranoid
    );
    fs::write(path, data)?;
    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn load(path: &Path, settings: &mut Settings) -> Result<()> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(());
    }

    let data = fs::read_to_string(path)?;
    parse(&data, settings)?;
    tracing::debug!(path = %path.display(), ?settings, "settings loaded");
    Ok(())
}

fn parse(data: &str, settings: &mut Settings) -> Result<()> {
    for (n, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(AegurError::config(format!("line {}: expected key=value", n + 1)));
        };
        let value = value.trim();

        match key.trim() {
            "length" => {
                settings.pass_length = match value.parse::<usize>() {
                    Ok(0) | Err(_) => {
                        return Err(AegurError::config(format!(
                            "line {}: length must be a positive integer, got '{value}'",
                            n + 1
                        )));
                    }
                    Ok(len) => len,
                }
            }
            "mode" => settings.mode = value.parse()?,
            "guess_rate" => {
                settings.guesses_per_second = match value.parse::<u64>() {
                    Ok(0) | Err(_) => {
                        return Err(AegurError::config(format!(
                            "line {}: guess_rate must be a positive integer, got '{value}'",
                            n + 1
                        )));
                    }
                    Ok(rate) => rate,
                }
            }
            "paranoid" => {
                settings.paranoid = value.parse().map_err(|_| {
                    AegurError::config(format!(
                        "line {}: paranoid must be true or false, got '{value}'",
                        n + 1
                    ))
                })?
            }
            other => prompts::warn(&format!(
                "Unknown settings key '{other}' on line {} ignored",
                n + 1
            )),
        }
    }
    Ok(())
}
