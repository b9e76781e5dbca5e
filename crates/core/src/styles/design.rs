use std::fmt;

use crate::error::FontError;

/// Font weight as a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(pub u16);

/// Weight names accepted in filenames. The empty name is a bare `-Italic`.
pub const WEIGHTS: &[(&str, Weight)] = &[
    ("Black", Weight(900)),
    ("Heavy", Weight(800)),
    ("Bold", Weight(700)),
    ("Semibold", Weight(600)),
    ("Medium", Weight(500)),
    ("", Weight(400)),
    ("Regular", Weight(400)),
    ("Light", Weight(300)),
    ("Thin", Weight(200)),
    ("Hairline", Weight(100)),
];

impl Weight {
    pub const REGULAR: Self = Weight(400);

    /// Look up a weight name in [`WEIGHTS`].
    pub fn from_name(name: &str) -> Result<Self, FontError> {
        WEIGHTS
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, weight)| *weight)
            .ok_or_else(|| FontError::UnknownWeight(name.to_string()))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Font slant (upright or italic). Upright sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slant {
    Upright,
    Italic,
}

impl Slant {
    /// Value of the CSS `font-style` descriptor.
    pub const fn css_value(self) -> &'static str {
        match self {
            Slant::Upright => "normal",
            Slant::Italic => "italic",
        }
    }
}

impl fmt::Display for Slant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_value())
    }
}
