//! MAINTAINERS manifest loading and parsing

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub mod parser;

pub use parser::ManifestParser;

pub const MANIFEST_FILE_NAME: &str = "MAINTAINERS";

/// Location of the manifest inside a source tree.
pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILE_NAME)
}

/// Read the manifest. A missing or unreadable manifest is fatal.
pub fn read_manifest(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed reading manifest: {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
