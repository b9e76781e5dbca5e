//! Fontface Core - font inspection and `@font-face` stylesheet generation.
//!
//! A body family ships as a small subset build (`LatoLatin-*.woff2`) and a
//! full build (`Lato-*.woff2`). The full faces are declared with a
//! `unicode-range` that excludes everything the subset already covers, so
//! browsers fetch them only for pages that need the extra characters.

pub mod cmap;
pub mod config;
pub mod error;
pub mod face;
pub mod font;
pub mod naming;
pub mod ranges;
pub mod styles;
pub mod stylesheet;

#[cfg(test)]
mod test_fonts;

pub use cmap::{CodepointSet, font_codepoints};
pub use config::FaceConfig;
pub use error::{Error, FontError, Result};
pub use face::{FaceName, make_face};
pub use font::{FontRecord, inspect_font};
pub use ranges::{Ranges, UnicodeRange, find_ranges};
pub use styles::{Slant, WEIGHTS, Weight};
pub use stylesheet::{FontGroups, build_stylesheet, inspect_fonts, make_stylesheet};
