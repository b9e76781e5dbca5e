//! Synthetic font fixtures for tests.

use std::io::Write;

use write_fonts::{
    FontBuilder, dump_table,
    tables::cmap::Cmap,
    types::{GlyphId, Tag},
};

/// A format 12 sequential map group: (start, end, start glyph).
pub type Group = (u32, u32, u32);

/// A cmap table with one format 12 subtable per `(platform, encoding, groups)` record.
pub fn cmap_table(records: &[(u16, u16, Vec<Group>)]) -> Vec<u8> {
    let header_len = 4 + 8 * records.len();
    let mut header = Vec::new();
    header.extend(0u16.to_be_bytes());
    header.extend((records.len() as u16).to_be_bytes());

    let mut subtables = Vec::new();
    for (platform, encoding, groups) in records {
        header.extend(platform.to_be_bytes());
        header.extend(encoding.to_be_bytes());
        header.extend(((header_len + subtables.len()) as u32).to_be_bytes());

        subtables.extend(12u16.to_be_bytes());
        subtables.extend(0u16.to_be_bytes());
        subtables.extend(((16 + 12 * groups.len()) as u32).to_be_bytes());
        subtables.extend(0u32.to_be_bytes());
        subtables.extend((groups.len() as u32).to_be_bytes());
        for (start, end, glyph) in groups {
            subtables.extend(start.to_be_bytes());
            subtables.extend(end.to_be_bytes());
            subtables.extend(glyph.to_be_bytes());
        }
    }

    header.extend(subtables);
    header
}

/// A cmap built the way font compilers do: format 4 for the BMP, under both
/// the Unicode and Windows platforms, with consecutive glyph ids.
pub fn bmp_cmap_table(codepoints: &[u32]) -> Vec<u8> {
    let mappings = codepoints
        .iter()
        .zip(1u32..)
        .map(|(&codepoint, glyph)| (char::from_u32(codepoint).unwrap(), GlyphId::new(glyph)));
    dump_table(&Cmap::from_mappings(mappings).unwrap()).unwrap()
}

/// Collapse sorted codepoints into format 12 groups with consecutive glyph ids.
pub fn groups_for(codepoints: &[u32]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut glyph = 1;
    for &codepoint in codepoints {
        match groups.last_mut() {
            Some((_, end, _)) if *end + 1 == codepoint => *end = codepoint,
            _ => groups.push((codepoint, codepoint, glyph)),
        }
        glyph += 1;
    }
    groups
}

pub fn sfnt_with_cmap(cmap: Vec<u8>) -> Vec<u8> {
    FontBuilder::new().add_raw(Tag::new(b"cmap"), cmap).build()
}

/// TrueType font whose Windows Unicode cmap covers exactly `codepoints`.
pub fn font_covering(codepoints: &[u32]) -> Vec<u8> {
    sfnt_with_cmap(cmap_table(&[(3, 10, groups_for(codepoints))]))
}

/// WOFF2 font whose Windows Unicode cmap covers exactly `codepoints`.
pub fn woff2_covering(codepoints: &[u32]) -> Vec<u8> {
    woff2_with_cmap(&cmap_table(&[(3, 10, groups_for(codepoints))]))
}

/// WOFF2 container holding only `cmap`, stored in an uncompressed brotli meta-block.
pub fn woff2_with_cmap(cmap: &[u8]) -> Vec<u8> {
    assert!(!cmap.is_empty() && cmap.len() <= 0x1_0000);

    // WBITS=16, MNIBBLES=4, MLEN-1, ISUNCOMPRESSED; then ISLAST+ISLASTEMPTY
    let meta = ((cmap.len() as u32 - 1) << 4) | (1 << 20);
    let mut stream = meta.to_le_bytes()[..3].to_vec();
    stream.extend_from_slice(cmap);
    stream.push(0x03);

    woff2_container(cmap.len(), stream)
}

/// WOFF2 container holding only `cmap`, brotli-compressed.
pub fn woff2_brotli_with_cmap(cmap: &[u8]) -> Vec<u8> {
    let mut writer = brotli::CompressorWriter::new(Vec::new(), 4096, 11, 22);
    writer.write_all(cmap).unwrap();
    woff2_container(cmap.len(), writer.into_inner())
}

fn woff2_container(cmap_len: usize, stream: Vec<u8>) -> Vec<u8> {
    // cmap is known tag 0, null transform
    let mut directory = vec![0u8];
    directory.extend(base128(cmap_len as u32));

    let total = 48 + directory.len() + stream.len();
    let mut out = Vec::with_capacity(total);
    out.extend(b"wOF2");
    out.extend(0x0001_0000u32.to_be_bytes());
    out.extend((total as u32).to_be_bytes());
    out.extend(1u16.to_be_bytes());
    out.extend(0u16.to_be_bytes());
    out.extend((12 + 16 + cmap_len as u32).to_be_bytes());
    out.extend((stream.len() as u32).to_be_bytes());
    out.extend(1u16.to_be_bytes());
    out.extend(0u16.to_be_bytes());
    out.extend([0u8; 20]);
    out.extend(directory);
    out.extend(stream);
    out
}

fn base128(mut value: u32) -> Vec<u8> {
    let mut out = vec![(value & 0x7F) as u8];
    value >>= 7;
    while value > 0 {
        out.push((value & 0x7F) as u8 | 0x80);
        value >>= 7;
    }
    out.reverse();
    out
}
