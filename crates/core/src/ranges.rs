//! Compression of codepoint sets into CSS `unicode-range` tokens.

use std::{fmt, iter::Peekable, ops::RangeInclusive};

use crate::cmap::CodepointSet;

/// An inclusive run of consecutive codepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnicodeRange {
    start: u32,
    end: u32,
}

impl UnicodeRange {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn codepoints(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

/// `U+41` for a single codepoint, `U+41-5A` for a run.
impl fmt::Display for UnicodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "U+{:X}", self.start)
        } else {
            write!(f, "U+{:X}-{:X}", self.start, self.end)
        }
    }
}

/// Lazily groups strictly ascending codepoints into maximal runs.
pub struct Ranges<I: Iterator<Item = u32>> {
    codepoints: Peekable<I>,
}

impl<I: Iterator<Item = u32>> Ranges<I> {
    /// `codepoints` must be strictly ascending.
    pub fn new(codepoints: I) -> Self {
        Self { codepoints: codepoints.peekable() }
    }
}

impl<I: Iterator<Item = u32>> Iterator for Ranges<I> {
    type Item = UnicodeRange;

    fn next(&mut self) -> Option<UnicodeRange> {
        let start = self.codepoints.next()?;
        let mut end = start;
        while let Some(next) = self.codepoints.next_if(|&cp| Some(cp) == end.checked_add(1)) {
            end = next;
        }
        Some(UnicodeRange::new(start, end))
    }
}

/// Ranges covering exactly `codepoints - exclude`, in ascending order.
pub fn find_ranges<'a>(
    codepoints: &'a CodepointSet,
    exclude: Option<&'a CodepointSet>,
) -> Ranges<impl Iterator<Item = u32> + 'a> {
    Ranges::new(
        codepoints
            .iter()
            .copied()
            .filter(move |cp| exclude.is_none_or(|exclude| !exclude.contains(cp))),
    )
}

/// Comma-separated ranges as written in a `unicode-range` descriptor.
pub fn format_ranges(ranges: impl IntoIterator<Item = UnicodeRange>) -> String {
    ranges.into_iter().map(|range| range.to_string()).collect::<Vec<_>>().join(", ")
}
