//! Filesystem helpers

use std::fs;
use std::path::Path;

use crate::errors::Result;

/// Replace `path` with `content` as a whole-file operation.
///
/// The content lands in a sibling temp file first and is renamed over the
/// target, so a reader sees either the previous file or the full new one.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let tmp_path = path.with_file_name(format!(".{}.tmp", file_name));

    fs::write(&tmp_path, content)?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err.into());
    }
    Ok(())
}
