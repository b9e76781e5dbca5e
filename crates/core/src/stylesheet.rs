//! Stylesheet assembly: inspect, group, pair subsets, emit.

use std::{collections::HashSet, path::Path};

use log::{info, warn};

use crate::{
    config::FaceConfig,
    error::{Error, Result},
    face::{FaceName, make_face},
    font::{FontRecord, inspect_font},
};

/// Records split into the three emitted groups, each sorted by weight then style.
#[derive(Debug, Default)]
pub struct FontGroups {
    /// Reduced-character-set body family faces.
    pub subset: Vec<FontRecord>,
    /// Full-character-set body family faces.
    pub full: Vec<FontRecord>,
    pub display: Vec<FontRecord>,
}

impl FontGroups {
    /// Sort and partition records, rejecting duplicate faces.
    ///
    /// Records of any other family are dropped with a warning.
    pub fn partition(mut fonts: Vec<FontRecord>, config: &FaceConfig) -> Result<Self> {
        check_duplicates(&fonts)?;
        fonts.sort_by_key(|font| (font.weight, font.slant));

        let mut groups = Self::default();
        for font in fonts {
            if font.family == config.body_family {
                if font.is_subset {
                    groups.subset.push(font);
                } else {
                    groups.full.push(font);
                }
            } else if font.family == config.display_family {
                groups.display.push(font);
            } else {
                warn!("{}: family {:?} is not configured, skipping", font.ps_name, font.family);
            }
        }
        Ok(groups)
    }

    /// The subset face with the same weight and style as `font`.
    pub fn subset_for(&self, font: &FontRecord) -> Result<&FontRecord> {
        self.subset.iter().find(|subset| subset.same_style(font)).ok_or_else(|| {
            Error::MissingSubset {
                family: font.family.clone(),
                weight: font.weight,
                slant: font.slant,
            }
        })
    }
}

fn check_duplicates(fonts: &[FontRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for font in fonts {
        if !seen.insert((&font.family, font.is_subset, font.weight, font.slant)) {
            return Err(Error::DuplicateFace {
                family: font.family.clone(),
                ps_name: font.ps_name.clone(),
                weight: font.weight,
                slant: font.slant,
            });
        }
    }
    Ok(())
}

/// Inspect every path, failing on the first bad file.
pub fn inspect_fonts<P: AsRef<Path>>(paths: &[P], config: &FaceConfig) -> Result<Vec<FontRecord>> {
    paths.iter().map(|path| inspect_font(path.as_ref(), config)).collect()
}

/// Render the full stylesheet for already inspected records.
pub fn build_stylesheet(fonts: Vec<FontRecord>, config: &FaceConfig) -> Result<String> {
    let groups = FontGroups::partition(fonts, config)?;

    let pairs = groups
        .full
        .iter()
        .map(|font| {
            let subset = groups.subset_for(font)?;
            if font.codepoints.is_subset(&subset.codepoints) {
                return Err(Error::EmptyUnicodeRange {
                    ps_name: font.ps_name.clone(),
                    subset: subset.ps_name.clone(),
                });
            }
            Ok((font, subset))
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        "{} subset, {} full and {} display faces",
        groups.subset.len(),
        groups.full.len(),
        groups.display.len()
    );

    let body = &config.body_family;
    let marker = config.subset_marker.to_lowercase();
    let unrestricted = |fonts: &[FontRecord], name| -> Vec<String> {
        fonts.iter().map(|font| make_face(font, None, name)).collect()
    };
    let restricted = |name| -> Vec<String> {
        pairs.iter().map(|&(font, subset)| make_face(font, Some(subset), name)).collect()
    };

    let mut faces = vec![format!("/* {body}: smaller, {marker}-only subset */")];
    faces.extend(unrestricted(&groups.subset, FaceName::Shared));
    faces.extend(unrestricted(&groups.subset, FaceName::Individual));
    faces.push(format!("/* {body}: larger, full character set version */"));
    faces.extend(restricted(FaceName::Shared));
    faces.extend(restricted(FaceName::Individual));
    faces.push(format!("/* {} */", config.display_family));
    faces.extend(unrestricted(&groups.display, FaceName::Shared));
    faces.extend(unrestricted(&groups.display, FaceName::Individual));

    Ok(faces.join("\n\n"))
}

/// Inspect `paths` and render their stylesheet.
pub fn make_stylesheet<P: AsRef<Path>>(paths: &[P], config: &FaceConfig) -> Result<String> {
    build_stylesheet(inspect_fonts(paths, config)?, config)
}
