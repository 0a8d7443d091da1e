use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the tomate directory - checks for a local .tomate first, then falls
/// back to global ~/.tomate
pub fn get_tomate_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_tomate(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".tomate"))
}

/// Find a local .tomate directory by walking up the directory tree
fn find_local_tomate(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let tomate_dir = current.join(".tomate");
        if tomate_dir.exists() && tomate_dir.is_dir() {
            return Some(tomate_dir);
        }
        current = current.parent()?;
    }
}

/// Ensure the tomate directory exists
pub fn ensure_tomate_dir() -> Result<PathBuf> {
    let dir = get_tomate_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .tomate directory in the current directory
pub fn init_local_tomate() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let tomate_dir = current_dir.join(".tomate");

    if tomate_dir.exists() {
        anyhow::bail!("Tomate directory already exists: {}", tomate_dir.display());
    }

    fs::create_dir_all(&tomate_dir)
        .with_context(|| format!("Failed to create directory: {}", tomate_dir.display()))?;

    Ok(tomate_dir)
}

/// Path to the single state file holding tasks and the daily counter
pub fn state_file() -> Result<PathBuf> {
    Ok(ensure_tomate_dir()?.join("state.json"))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path.parent().context("File path has no parent directory")?;

    let mut temp_file =
        NamedTempFile::new_in(dir).context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}
