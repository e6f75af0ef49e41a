use thiserror::Error;

pub use color_eyre::eyre::eyre;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unexpected end of packet")]
    UnexpectedEof,

    #[error("Invalid packet")]
    InvalidPacket,

    #[error("Invalid UTF-8 in text column")]
    InvalidUtf8,

    #[error("Invalid JSON value: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error("Library bug: {0}")]
    LibraryBug(color_eyre::eyre::Report),
}

pub type Result<T> = std::result::Result<T, Error>;
