//! Unicode coverage of a font, read from its cmap table.

use std::collections::BTreeSet;

use font_woff2::{Woff2Font, is_woff2};
use log::debug;
use read_fonts::{
    FontData, FontRead, FontRef, TableProvider,
    tables::cmap::{Cmap, CmapSubtable, EncodingRecord, PlatformId},
    types::Tag,
};

use crate::error::FontError;

/// Codepoints a face covers, kept sorted.
pub type CodepointSet = BTreeSet<u32>;

const CMAP: Tag = Tag::new(b"cmap");

/// Codepoint of the terminating segment every format 4 subtable ends with.
const FORMAT4_TERMINATOR: u32 = 0xFFFF;

/// Windows encodings that carry Unicode: Symbol, BMP and full repertoire.
const WINDOWS_UNICODE_ENCODINGS: &[u16] = &[0, 1, 10];

/// Codepoints covered by a WOFF2 or sfnt (TrueType/OpenType) font.
pub fn font_codepoints(data: &[u8]) -> Result<CodepointSet, FontError> {
    if is_woff2(data) {
        let table = Woff2Font::new(data)?.table_data(CMAP)?.ok_or(FontError::NoCmap)?;
        let cmap = Cmap::read(FontData::new(&table))?;
        unicode_codepoints(&cmap)
    } else {
        let font = FontRef::new(data)?;
        if font.table_data(CMAP).is_none() {
            return Err(FontError::NoCmap);
        }
        unicode_codepoints(&font.cmap()?)
    }
}

/// Keys of the first Unicode-encoded subtable.
///
/// Format 14 subtables only hold variation sequences and are passed over.
/// The mandatory `0xFFFF` end segment of format 4 is not a mapping.
pub fn unicode_codepoints(cmap: &Cmap) -> Result<CodepointSet, FontError> {
    for record in cmap.encoding_records().iter().filter(|record| is_unicode(record)) {
        let subtable = record.subtable(cmap.offset_data())?;
        if matches!(subtable, CmapSubtable::Format14(_)) {
            continue;
        }

        let is_format4 = matches!(subtable, CmapSubtable::Format4(_));
        let codepoints: CodepointSet = subtable
            .iter()
            .map(|(codepoint, _)| codepoint)
            .filter(|&codepoint| !(is_format4 && codepoint == FORMAT4_TERMINATOR))
            .collect();
        debug!(
            "cmap subtable ({:?}, {}): {} codepoints",
            record.platform_id(),
            record.encoding_id(),
            codepoints.len()
        );
        return Ok(codepoints);
    }
    Err(FontError::NoUnicodeCmap)
}

fn is_unicode(record: &EncodingRecord) -> bool {
    match record.platform_id() {
        PlatformId::Unicode => true,
        PlatformId::Windows => WINDOWS_UNICODE_ENCODINGS.contains(&record.encoding_id()),
        _ => false,
    }
}
