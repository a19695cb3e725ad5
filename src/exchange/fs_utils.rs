use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io;
use std::path::Path;

/// Refuse to overwrite an existing output file unless `force` is set.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }
    warning(format!("The file '{}' already exists.", path.display()));
    Err(io::Error::other("Export cancelled: pass --force to overwrite").into())
}
