//! `@font-face` block emission.

use log::debug;

use crate::{
    config::FONT_FORMAT,
    font::FontRecord,
    ranges::{find_ranges, format_ranges},
};

/// Which name a face is declared under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceName {
    /// The shared family name, so browsers pick among weights and styles.
    Shared,
    /// The font's own `ps_name`, for referencing one face directly.
    Individual,
}

impl FaceName {
    pub fn of(self, font: &FontRecord) -> &str {
        match self {
            FaceName::Shared => &font.family,
            FaceName::Individual => &font.ps_name,
        }
    }
}

/// One `@font-face` block for `font`.
///
/// With a `subset` companion the face gets a `unicode-range` limited to the
/// codepoints the companion does not cover; without one it applies to all text.
pub fn make_face(font: &FontRecord, subset: Option<&FontRecord>, name: FaceName) -> String {
    let mut css = vec![
        "@font-face {".to_string(),
        format!("font-family: \"{}\";", name.of(font)),
        format!("src: url(\"{}\") format(\"{FONT_FORMAT}\");", font.url),
        format!("font-weight: {};", font.weight),
        format!("font-style: {};", font.style()),
        "font-display: swap;".to_string(),
    ];

    if let Some(subset) = subset {
        let ranges: Vec<_> = find_ranges(&font.codepoints, Some(&subset.codepoints)).collect();
        debug!("{}: {} ranges beyond {}", font.ps_name, ranges.len(), subset.ps_name);
        css.push(format!("unicode-range: {};", format_ranges(ranges)));
    }

    css.push("}".to_string());
    css.join("\n")
}
