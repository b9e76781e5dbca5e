//! Error types for font inspection and stylesheet generation.

use std::{io, path::PathBuf, result};

use read_fonts::ReadError;

use crate::styles::{Slant, Weight};

/// Errors raised while inspecting a single font file.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("failed to read font: {0}")]
    Io(#[from] io::Error),

    #[error("filename {0:?} does not match <Family>[Latin]-<Weight>[Italic]")]
    InvalidFilename(String),

    #[error("unknown weight name {0:?}")]
    UnknownWeight(String),

    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),

    #[error("invalid WOFF2 container: {0}")]
    Woff2(#[from] font_woff2::Error),

    #[error("no cmap table in font")]
    NoCmap,

    #[error("no Unicode subtable in cmap")]
    NoUnicodeCmap,
}

/// Errors that abort stylesheet generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to inspect {}", .path.display())]
    Font {
        path: PathBuf,
        #[source]
        source: FontError,
    },

    #[error("no {family} subset face for weight {weight} {slant}")]
    MissingSubset { family: String, weight: Weight, slant: Slant },

    #[error("duplicate face {family} {weight} {slant} ({ps_name})")]
    DuplicateFace { family: String, ps_name: String, weight: Weight, slant: Slant },

    /// The full face would get an empty `unicode-range`, which CSS rejects.
    #[error(
        "{ps_name} covers no codepoints beyond its subset face {subset}; \
         its unicode-range would be empty, so remove the redundant full face"
    )]
    EmptyUnicodeRange { ps_name: String, subset: String },
}

pub type Result<T> = result::Result<T, Error>;
