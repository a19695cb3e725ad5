use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::fs;
use std::path::Path;
use zip::ZipWriter;
use zip::write::FileOptions;

/// Copy every record blob in the durable store to the destination: a zip
/// archive with `--compress`, otherwise a directory of plain copies.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Backup { file, compress } = cmd else {
        return Ok(());
    };

    let src = ctx.store.durable_dir();
    if !src.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Store not found: {}", src.display()),
        )
        .into());
    }

    let dest = Path::new(file);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    let count = if *compress {
        compress_store(src, dest)?
    } else {
        copy_store(src, dest)?
    };
    success(format!(
        "Backup created: {} ({} file(s))",
        dest.display(),
        count
    ));
    Ok(())
}

fn store_blobs(src: &Path) -> AppResult<Vec<std::path::PathBuf>> {
    let mut blobs = Vec::new();
    for entry in fs::read_dir(src)? {
        let path = entry?.path();
        if path.extension().is_some_and(|e| e == "json") {
            blobs.push(path);
        }
    }
    blobs.sort();
    Ok(blobs)
}

fn copy_store(src: &Path, dest: &Path) -> AppResult<usize> {
    fs::create_dir_all(dest)?;
    let blobs = store_blobs(src)?;
    for blob in &blobs {
        let name = blob
            .file_name()
            .ok_or_else(|| AppError::Other("blob without a file name".to_string()))?;
        fs::copy(blob, dest.join(name))?;
    }
    Ok(blobs.len())
}

fn compress_store(src: &Path, dest: &Path) -> AppResult<usize> {
    let file = fs::File::create(dest)?;
    let mut zip = ZipWriter::new(file);

    let blobs = store_blobs(src)?;
    for blob in &blobs {
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        let name = blob
            .file_name()
            .ok_or_else(|| AppError::Other("blob without a file name".to_string()))?;
        zip.start_file(name.to_string_lossy(), options)
            .map_err(std::io::Error::other)?;
        let mut f = fs::File::open(blob)?;
        std::io::copy(&mut f, &mut zip)?;
    }
    zip.finish().map_err(std::io::Error::other)?;
    Ok(blobs.len())
}
