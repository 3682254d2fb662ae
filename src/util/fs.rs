use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::model::OwnerCode;

/// Recursively ensure a directory exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory {}", path.display()))
}

/// Read a file to string, returning a descriptive error on failure.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))
}

/// Create (or truncate) a file for writing, creating parent directories if needed.
pub fn create_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    File::create(path).with_context(|| format!("failed to create {}", path.display()))
}

/// Load owner codes from a file with one code per line.
///
/// Blank lines and anything after `#` are ignored.
pub fn read_owner_codes(path: &Path) -> Result<Vec<OwnerCode>> {
    let data = read_to_string(path)?;
    let mut codes = Vec::new();
    for (lineno, line) in data.lines().enumerate() {
        let code = line.split('#').next().unwrap_or_default().trim();
        if code.is_empty() {
            continue;
        }
        let owner = OwnerCode::new(code)
            .with_context(|| format!("{}:{}: bad owner code", path.display(), lineno + 1))?;
        codes.push(owner);
    }
    Ok(codes)
}
