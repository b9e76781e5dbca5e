//! WOFF2 container reading.
//!
//! Parses the WOFF2 header and table directory and extracts individual
//! tables from the brotli-compressed table stream. Only tables stored
//! without a transform can be extracted; `glyf`, `loca` and `hmtx` are
//! usually transformed, but `cmap`, `name`, `OS/2` and friends never are.
//!
//! # Example
//!
//! ```no_run
//! use font_woff2::{Woff2Font, is_woff2};
//! use read_fonts::types::Tag;
//!
//! let data = std::fs::read("Lato-Regular.woff2").unwrap();
//! assert!(is_woff2(&data));
//! let font = Woff2Font::new(&data).unwrap();
//! let cmap = font.table_data(Tag::new(b"cmap")).unwrap();
//! ```

mod error;

use std::io::Read;

use brotli_decompressor::Decompressor;
use log::debug;
use read_fonts::types::Tag;

pub use error::{Error, Result};

/// WOFF2 signature (`wOF2`).
pub const WOFF2_SIGNATURE: u32 = 0x774F_4632;

/// sfnt flavor of a font collection (`ttcf`).
const COLLECTION_FLAVOR: u32 = 0x7474_6366;

/// Size of the fixed WOFF2 header.
const HEADER_LEN: usize = 48;

const BROTLI_BUFFER_SIZE: usize = 4096;

/// Upper bound on the decompressed table stream, matching the reference decoder.
pub const MAX_STREAM_SIZE: usize = 30 * 1024 * 1024;

/// Flag value selecting an explicit four-byte tag after the flags byte.
const EXPLICIT_TAG: u8 = 0x3F;

/// Table tags addressable by index from the directory flags byte.
const KNOWN_TAGS: [&[u8; 4]; 63] = [
    b"cmap", b"head", b"hhea", b"hmtx", b"maxp", b"name", b"OS/2", b"post", b"cvt ", b"fpgm",
    b"glyf", b"loca", b"prep", b"CFF ", b"VORG", b"EBDT", b"EBLC", b"gasp", b"hdmx", b"kern",
    b"LTSH", b"PCLT", b"VDMX", b"vhea", b"vmtx", b"BASE", b"GDEF", b"GPOS", b"GSUB", b"EBSC",
    b"JSTF", b"MATH", b"CBDT", b"CBLC", b"COLR", b"CPAL", b"SVG ", b"sbix", b"acnt", b"avar",
    b"bdat", b"bloc", b"bsln", b"cvar", b"fdsc", b"feat", b"fmtx", b"fvar", b"gvar", b"hsty",
    b"just", b"lcar", b"mort", b"morx", b"opbd", b"prop", b"trak", b"Zapf", b"Silf", b"Glat",
    b"Gloc", b"Feat", b"Sill",
];

/// Returns `true` if `data` starts with the WOFF2 signature.
pub fn is_woff2(data: &[u8]) -> bool {
    data.starts_with(&WOFF2_SIGNATURE.to_be_bytes())
}

/// One entry of the WOFF2 table directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub tag: Tag,
    /// Length of the table once decoded.
    pub orig_length: u32,
    /// Length in the compressed stream, present only for transformed tables.
    pub transform_length: Option<u32>,
    /// Offset of this table within the decompressed stream.
    stream_offset: usize,
}

impl TableEntry {
    pub fn is_transformed(&self) -> bool {
        self.transform_length.is_some()
    }

    /// Number of bytes this table occupies in the decompressed stream.
    pub fn stream_length(&self) -> usize {
        self.transform_length.unwrap_or(self.orig_length) as usize
    }
}

/// A parsed WOFF2 container borrowing the original file data.
#[derive(Debug, Clone)]
pub struct Woff2Font<'a> {
    tables: Vec<TableEntry>,
    stream: &'a [u8],
}

impl<'a> Woff2Font<'a> {
    /// Parse the header and table directory.
    ///
    /// The compressed stream is not touched until a table is requested.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let mut cursor = Cursor::new(data);

        let signature = cursor.u32()?;
        if signature != WOFF2_SIGNATURE {
            return Err(Error::InvalidSignature(signature));
        }
        let flavor = cursor.u32()?;
        let _length = cursor.u32()?;
        let num_tables = cursor.u16()?;
        let _reserved = cursor.u16()?;
        let _total_sfnt_size = cursor.u32()?;
        let total_compressed_size = cursor.u32()? as usize;
        cursor.skip(HEADER_LEN - cursor.pos)?;

        if flavor == COLLECTION_FLAVOR {
            return Err(Error::UnsupportedCollection);
        }

        let mut tables = Vec::with_capacity(num_tables as usize);
        let mut stream_offset: usize = 0;
        for _ in 0..num_tables {
            let entry = cursor.table_entry(stream_offset)?;
            stream_offset = stream_offset
                .checked_add(entry.stream_length())
                .filter(|&len| len <= MAX_STREAM_SIZE)
                .ok_or(Error::StreamTooLarge(entry.tag))?;
            tables.push(entry);
        }

        let start = cursor.pos;
        let stream = start
            .checked_add(total_compressed_size)
            .and_then(|end| data.get(start..end))
            .ok_or(Error::Truncated(data.len()))?;

        debug!(
            "WOFF2 flavor {flavor:#010x}: {num_tables} tables, {total_compressed_size} compressed bytes"
        );

        Ok(Self { tables, stream })
    }

    pub fn entry(&self, tag: Tag) -> Option<&TableEntry> {
        self.tables.iter().find(|entry| entry.tag == tag)
    }

    /// Decompress and return the bytes of an untransformed table.
    ///
    /// Returns `Ok(None)` if the font has no such table. Decompression stops
    /// at the end of the requested table.
    pub fn table_data(&self, tag: Tag) -> Result<Option<Vec<u8>>> {
        let Some(entry) = self.entry(tag) else {
            return Ok(None);
        };
        if entry.is_transformed() {
            return Err(Error::TransformedTable(tag));
        }

        // bounded by MAX_STREAM_SIZE when the directory was parsed
        let end = entry.stream_offset + entry.stream_length();
        let mut decompressed = Vec::new();
        Decompressor::new(self.stream, BROTLI_BUFFER_SIZE)
            .take(end as u64)
            .read_to_end(&mut decompressed)?;

        if decompressed.len() < end {
            return Err(Error::ShortStream(tag));
        }
        Ok(Some(decompressed.split_off(entry.stream_offset)))
    }
}

/// Big-endian reader over the container bytes.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self
            .data
            .get(self.pos..self.pos + N)
            .and_then(|slice| <[u8; N]>::try_from(slice).ok())
            .ok_or(Error::Truncated(self.pos))?;
        self.pos += N;
        Ok(bytes)
    }

    fn skip(&mut self, len: usize) -> Result<()> {
        if self.pos + len > self.data.len() {
            return Err(Error::Truncated(self.pos));
        }
        self.pos += len;
        Ok(())
    }

    fn u8(&mut self) -> Result<u8> {
        self.bytes::<1>().map(|[byte]| byte)
    }

    fn u16(&mut self) -> Result<u16> {
        self.bytes::<2>().map(u16::from_be_bytes)
    }

    fn u32(&mut self) -> Result<u32> {
        self.bytes::<4>().map(u32::from_be_bytes)
    }

    /// Variable-length UIntBase128: at most five bytes, no leading zeros.
    fn base128(&mut self) -> Result<u32> {
        let start = self.pos;
        let mut value: u32 = 0;
        for i in 0..5 {
            let byte = self.u8()?;
            if i == 0 && byte == 0x80 {
                return Err(Error::InvalidBase128(start));
            }
            if value & 0xFE00_0000 != 0 {
                return Err(Error::InvalidBase128(start));
            }
            value = (value << 7) | u32::from(byte & 0x7F);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(Error::InvalidBase128(start))
    }

    fn table_entry(&mut self, stream_offset: usize) -> Result<TableEntry> {
        let flags = self.u8()?;
        let tag = match flags & 0x3F {
            EXPLICIT_TAG => Tag::new(&self.bytes::<4>()?),
            index => Tag::new(KNOWN_TAGS[index as usize]),
        };
        let orig_length = self.base128()?;

        // glyf and loca use transform version 0 for their transformed form;
        // every other table is transformed only for non-zero versions.
        let version = flags >> 6;
        let transformed = if tag == Tag::new(b"glyf") || tag == Tag::new(b"loca") {
            version == 0
        } else {
            version != 0
        };
        let transform_length = if transformed { Some(self.base128()?) } else { None };

        Ok(TableEntry { tag, orig_length, transform_length, stream_offset })
    }
}
