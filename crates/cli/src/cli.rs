//! CLI definition and dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use fontface_core::{
    FaceConfig,
    config::{
        DEFAULT_BODY_FAMILY, DEFAULT_DISPLAY_FAMILY, DEFAULT_SUBSET_MARKER, DEFAULT_URL_PREFIX,
    },
    make_stylesheet,
};
use log::info;

use crate::io::write_stylesheet;

#[derive(Debug, Parser)]
#[command(name = "make-faces", version)]
#[command(about = "Generate CSS @font-face rules from web font files")]
pub struct Cli {
    /// Font files named <Family>[Latin]-<Weight>[Italic].woff2
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Family that ships a reduced-character-set variant
    #[arg(long, default_value = DEFAULT_BODY_FAMILY)]
    pub body_family: String,

    /// Family emitted without subset pairing
    #[arg(long, default_value = DEFAULT_DISPLAY_FAMILY)]
    pub display_family: String,

    /// Filename marker of reduced-character-set builds
    #[arg(long, default_value = DEFAULT_SUBSET_MARKER)]
    pub subset_marker: String,

    /// URL prefix of each face's src
    #[arg(long, default_value = DEFAULT_URL_PREFIX)]
    pub url_prefix: String,

    /// Write the stylesheet here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn config(&self) -> FaceConfig {
        FaceConfig {
            body_family: self.body_family.clone(),
            display_family: self.display_family.clone(),
            subset_marker: self.subset_marker.clone(),
            url_prefix: self.url_prefix.clone(),
        }
    }

    pub fn run(self) -> Result<()> {
        let css = make_stylesheet(&self.files, &self.config())?;
        write_stylesheet(self.output.as_deref(), &css)?;
        info!("Generated faces for {} fonts", self.files.len());
        Ok(())
    }
}
