//! Error types for mzip-compress

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("input too large: {size} bytes exceeds limit of {limit}")]
    InputTooLarge { size: usize, limit: usize },

    #[error("no code assigned for byte {0:#04x}")]
    MissingCode(u8),

    #[error("invalid source name: {0}")]
    InvalidSourceName(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
