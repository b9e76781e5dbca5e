//! Stylesheet output.

use std::{
    fs::{create_dir_all, write},
    io::{Write, stdout},
    path::Path,
};

use anyhow::{Context, Result};

/// Write `css` plus a trailing newline to `output`, or to stdout when `None`.
pub fn write_stylesheet(output: Option<&Path>, css: &str) -> Result<()> {
    match output {
        Some(path) => {
            ensure_parent_dir(path)?;
            write(path, format!("{css}\n"))
                .with_context(|| format!("Failed to write stylesheet: {}", path.display()))
        }
        None => {
            let mut out = stdout().lock();
            writeln!(out, "{css}").context("Failed to write stylesheet to stdout")?;
            out.flush().context("Failed to flush stdout")
        }
    }
}

/// Create parent directory if it doesn't exist.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}
