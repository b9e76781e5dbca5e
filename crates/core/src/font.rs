//! Per-file font records.

use std::{fs::read, path::Path};

use log::info;

use crate::{
    cmap::{CodepointSet, font_codepoints},
    config::FaceConfig,
    error::{Error, FontError, Result},
    naming::FileNaming,
    styles::{Slant, Weight},
};

/// Everything needed to emit the faces of one font file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRecord {
    /// Filename stem without the subset marker, used as the individual face name.
    pub ps_name: String,
    /// Shared family name, e.g. "Playfair Display".
    pub family: String,
    pub is_subset: bool,
    pub weight: Weight,
    pub slant: Slant,
    pub codepoints: CodepointSet,
    pub url: String,
}

impl FontRecord {
    /// Build a record from a file name (with extension) and the font's bytes.
    pub fn from_font_data(
        file_name: &str,
        data: &[u8],
        config: &FaceConfig,
    ) -> std::result::Result<Self, FontError> {
        let stem = Path::new(file_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| FontError::InvalidFilename(file_name.to_string()))?;
        let naming = FileNaming::parse(stem, &config.subset_marker)?;
        let codepoints = font_codepoints(data)?;

        Ok(Self::new(naming, codepoints, config.url_for(file_name)))
    }

    pub fn new(naming: FileNaming, codepoints: CodepointSet, url: String) -> Self {
        let FileNaming { ps_name, family, is_subset, weight, slant } = naming;
        Self { ps_name, family, is_subset, weight, slant, codepoints, url }
    }

    /// CSS `font-style` value.
    pub fn style(&self) -> &'static str {
        self.slant.css_value()
    }

    /// Whether `other` has the same weight and style.
    pub fn same_style(&self, other: &FontRecord) -> bool {
        self.weight == other.weight && self.slant == other.slant
    }
}

/// Read and inspect one font file.
pub fn inspect_font(path: &Path, config: &FaceConfig) -> Result<FontRecord> {
    let wrap = |source: FontError| Error::Font { path: path.to_path_buf(), source };

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| wrap(FontError::InvalidFilename(path.display().to_string())))?;
    let data = read(path).map_err(|e| wrap(e.into()))?;
    let record = FontRecord::from_font_data(file_name, &data, config).map_err(wrap)?;

    info!(
        "{file_name}: {} {} {}{}, {} codepoints",
        record.family,
        record.weight,
        record.style(),
        if record.is_subset { " (subset)" } else { "" },
        record.codepoints.len()
    );

    Ok(record)
}
