use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

pub fn read_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)?;
    debug!("Read {} bytes from {:?}", text.len(), path);
    Ok(text)
}

pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content.as_bytes())?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}

/// Sibling path formed by appending `suffix` to the full file name.
///
/// `PlayerRig.tscn` + `.bak_coords` gives `PlayerRig.tscn.bak_coords`.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Size of a file in mebibytes.
pub fn file_size_mb(path: &Path) -> Result<f64> {
    Ok(fs::metadata(path)?.len() as f64 / 1024.0 / 1024.0)
}
