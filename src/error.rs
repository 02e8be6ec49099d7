//! Error type shared by every module.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AegurError {
    #[error("Invalid length: {length} (must be at least 1)")]
    InvalidLength { length: i64 },

    #[error("Length too large: {length} (cannot reserve a buffer for it)")]
    LengthTooLarge { length: usize },

    #[error("Invalid mode: '{name}' (expected bank, ascii, strong or paranoid)")]
    InvalidMode { name: String },

    #[error("Pool integrity error: {message}")]
    PoolIntegrity { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Clipboard error: {message}")]
    Clipboard { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AegurError {
    pub fn pool_integrity(message: impl Into<String>) -> Self {
        Self::PoolIntegrity {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidLength { .. }
            | Self::LengthTooLarge { .. }
            | Self::InvalidMode { .. }
            | Self::Config { .. } => 2,
            Self::PoolIntegrity { .. } => 3,
            Self::Clipboard { .. } | Self::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AegurError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_exit_with_two() {
        assert_eq!(AegurError::InvalidLength { length: 0 }.exit_code(), 2);
        assert_eq!(AegurError::InvalidMode { name: "x".into() }.exit_code(), 2);
        assert_eq!(AegurError::LengthTooLarge { length: usize::MAX }.exit_code(), 2);
        assert_eq!(AegurError::config("bad").exit_code(), 2);
    }

    #[test]
    fn integrity_errors_exit_with_three() {
        assert_eq!(AegurError::pool_integrity("dup").exit_code(), 3);
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = AegurError::InvalidLength { length: -4 };
        assert_eq!(err.to_string(), "Invalid length: -4 (must be at least 1)");
        let err = AegurError::InvalidMode { name: "weak".into() };
        assert!(err.to_string().contains("'weak'"));
    }
}
