//! Defaults and configuration for stylesheet generation.

/// Family with a reduced-character-set variant.
pub const DEFAULT_BODY_FAMILY: &str = "Lato";

/// Family emitted without any subset pairing.
pub const DEFAULT_DISPLAY_FAMILY: &str = "Playfair Display";

/// Filename marker of reduced-character-set builds (e.g. `LatoLatin-Bold.woff2`).
pub const DEFAULT_SUBSET_MARKER: &str = "Latin";

/// Prefix of the `src` URL of every face.
pub const DEFAULT_URL_PREFIX: &str = "/fonts";

/// Filename suffix marking italic faces.
pub const ITALIC_SUFFIX: &str = "Italic";

/// Format hint written into every `src` descriptor.
pub const FONT_FORMAT: &str = "woff2";

/// Settings shared by inspection and emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceConfig {
    /// Display name of the body family, e.g. "Lato".
    pub body_family: String,
    /// Display name of the display family, e.g. "Playfair Display".
    pub display_family: String,
    pub subset_marker: String,
    pub url_prefix: String,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            body_family: DEFAULT_BODY_FAMILY.to_string(),
            display_family: DEFAULT_DISPLAY_FAMILY.to_string(),
            subset_marker: DEFAULT_SUBSET_MARKER.to_string(),
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
        }
    }
}

impl FaceConfig {
    /// URL under which `file_name` is served.
    pub fn url_for(&self, file_name: &str) -> String {
        format!("{}/{file_name}", self.url_prefix.trim_end_matches('/'))
    }
}
