//! Error types for WOFF2 container reading.

use std::{io, result};

use read_fonts::types::Tag;

/// Errors that can occur while reading a WOFF2 container.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not a WOFF2 file (signature {0:#010x})")]
    InvalidSignature(u32),

    #[error("truncated WOFF2 data at offset {0}")]
    Truncated(usize),

    #[error("invalid UIntBase128 value at offset {0}")]
    InvalidBase128(usize),

    #[error("font collections are not supported")]
    UnsupportedCollection,

    #[error("table {0} is stored transformed and cannot be extracted")]
    TransformedTable(Tag),

    #[error("table stream exceeds {max} bytes at table {0}", max = crate::MAX_STREAM_SIZE)]
    StreamTooLarge(Tag),

    #[error("compressed stream ends before table {0}")]
    ShortStream(Tag),

    #[error("brotli decompression failed: {0}")]
    Decompress(#[from] io::Error),
}

pub type Result<T> = result::Result<T, Error>;
