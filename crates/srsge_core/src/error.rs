use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::layout::Field;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot open {} for reading: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("cannot measure file length: {source}")]
    Length { source: io::Error },

    #[error("cannot seek to {field} at offset {offset}: {source}")]
    Seek {
        field: Field,
        offset: u64,
        source: io::Error,
    },

    #[error("{field} at offset {offset} lies past the end of the file ({len} bytes)")]
    OutOfBounds { field: Field, offset: u64, len: u64 },

    #[error("short read of {field} at offset {offset}: {source}")]
    ShortRead {
        field: Field,
        offset: u64,
        source: io::Error,
    },
}

impl ReadError {
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Open { .. } | Self::Length { .. } => None,
            Self::Seek { field, .. }
            | Self::OutOfBounds { field, .. }
            | Self::ShortRead { field, .. } => Some(*field),
        }
    }
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot open {} for writing: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("cannot measure file length: {source}")]
    Length { source: io::Error },

    #[error("cannot seek to {field} at offset {offset}: {source}")]
    Seek {
        field: Field,
        offset: u64,
        source: io::Error,
    },

    #[error("{field} at offset {offset} lies past the end of the file ({len} bytes)")]
    OutOfBounds { field: Field, offset: u64, len: u64 },

    #[error("short write of {field} at offset {offset}: {source}")]
    ShortWrite {
        field: Field,
        offset: u64,
        source: io::Error,
    },

    #[error("cannot flush written fields: {source}")]
    Flush { source: io::Error },
}

impl WriteError {
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Open { .. } | Self::Length { .. } | Self::Flush { .. } => None,
            Self::Seek { field, .. }
            | Self::OutOfBounds { field, .. }
            | Self::ShortWrite { field, .. } => Some(*field),
        }
    }
}
