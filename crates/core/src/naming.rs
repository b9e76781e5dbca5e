//! Face metadata inferred from `<Family>[Latin]-<Weight>[Italic]` filename stems.

use crate::{
    config::ITALIC_SUFFIX,
    error::FontError,
    styles::{Slant, Weight},
};

/// Everything a filename stem says about its face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNaming {
    /// Stem with the subset marker removed, e.g. "Lato-BoldItalic".
    pub ps_name: String,
    /// Human-readable family, e.g. "Playfair Display".
    pub family: String,
    pub is_subset: bool,
    pub weight: Weight,
    pub slant: Slant,
}

impl FileNaming {
    pub fn parse(stem: &str, subset_marker: &str) -> Result<Self, FontError> {
        let family = parse_family(stem, subset_marker)?;
        let (weight, slant) = parse_weight(stem)?;
        let is_subset = !subset_marker.is_empty() && stem.contains(subset_marker);

        Ok(Self {
            ps_name: ps_name(stem, subset_marker),
            family: display_family(family),
            is_subset,
            weight,
            slant,
        })
    }
}

/// Family part of a stem: everything before the first hyphen, minus a trailing subset marker.
pub fn parse_family<'a>(stem: &'a str, subset_marker: &str) -> Result<&'a str, FontError> {
    let (head, _) = split_stem(stem)?;
    let family = if subset_marker.is_empty() {
        head
    } else {
        head.strip_suffix(subset_marker).unwrap_or(head)
    };

    if family.is_empty() {
        return Err(FontError::InvalidFilename(stem.to_string()));
    }
    Ok(family)
}

/// Weight and slant of a stem: everything after the first hyphen, where a
/// trailing `Italic` selects the slant and the rest names the weight.
pub fn parse_weight(stem: &str) -> Result<(Weight, Slant), FontError> {
    let (_, tail) = split_stem(stem)?;
    let (token, slant) = match tail.strip_suffix(ITALIC_SUFFIX) {
        Some(token) => (token, Slant::Italic),
        None => (tail, Slant::Upright),
    };
    Ok((Weight::from_name(token)?, slant))
}

/// Insert a space before every uppercase letter but the first ("PlayfairDisplay" -> "Playfair Display").
pub fn display_family(family: &str) -> String {
    let mut out = String::with_capacity(family.len() + 4);
    for (i, c) in family.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// The stem with every occurrence of the subset marker removed.
pub fn ps_name(stem: &str, subset_marker: &str) -> String {
    if subset_marker.is_empty() {
        stem.to_string()
    } else {
        stem.replace(subset_marker, "")
    }
}

fn split_stem(stem: &str) -> Result<(&str, &str), FontError> {
    stem.split_once('-').ok_or_else(|| FontError::InvalidFilename(stem.to_string()))
}
