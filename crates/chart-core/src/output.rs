// File: crates/chart-core/src/output.rs
// Summary: All-or-nothing file output for encoded images.

use crate::error::{ChartError, Result};
use std::io::Write;
use std::path::Path;

/// Write `bytes` to `path` through a sibling temp file that is renamed over the target.
/// Either the complete new image is at `path` afterwards, or the previous content is untouched.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let io_err = |source: std::io::Error| ChartError::Io { path: path.to_path_buf(), source };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(io_err)?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".chart-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
